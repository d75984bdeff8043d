use std::collections::BTreeMap;

use crate::{Exercise, Muscle, Name};

/// Eligible exercise names grouped by target muscle.
///
/// Each pool keeps the order in which the exercises were supplied. Muscles
/// without any eligible exercise have no pool at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MusclePools<'a>(BTreeMap<Muscle, Vec<&'a Name>>);

impl<'a> MusclePools<'a> {
    pub fn build(eligible: impl IntoIterator<Item = &'a Exercise>) -> Self {
        let mut pools: BTreeMap<Muscle, Vec<&'a Name>> = BTreeMap::new();
        for exercise in eligible {
            pools.entry(exercise.muscle.clone()).or_default().push(&exercise.name);
        }
        Self(pools)
    }

    /// Pool of the given muscle, empty if no exercise targets it.
    #[must_use]
    pub fn get(&self, muscle: &Muscle) -> &[&'a Name] {
        self.0.get(muscle).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn muscles(&self) -> Vec<Muscle> {
        self.0.keys().cloned().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
