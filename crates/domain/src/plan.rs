use std::collections::{BTreeMap, BTreeSet};

use derive_more::Deref;
use log::{debug, warn};

use crate::{
    Catalog, EligibilityFilter, EquipmentID, Level, Muscle, MusclePools, Name, Quotas, Split,
};

/// Exercises of one training day, grouped by muscle in training order.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct DailyPlan(Vec<Name>);

impl DailyPlan {
    /// Days without any exercise are presented as rest days.
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Name>> for DailyPlan {
    fn from(value: Vec<Name>) -> Self {
        Self(value)
    }
}

#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct WeeklyPlan(Vec<DailyPlan>);

impl WeeklyPlan {
    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.0.iter().map(|day| day.len()).sum()
    }

    /// True if no day contains any exercise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(DailyPlan::is_rest_day)
    }

    /// Substitutes the exercise at `position` of `day` (both 0-based) and returns the
    /// exercise that was replaced.
    pub fn replace(
        &mut self,
        day: usize,
        position: usize,
        replacement: Name,
    ) -> Result<Name, ReplaceError> {
        let days = self.0.len();
        let daily_plan = self
            .0
            .get_mut(day)
            .ok_or(ReplaceError::DayOutOfRange { day, days })?;
        let exercises = daily_plan.0.len();
        let slot = daily_plan
            .0
            .get_mut(position)
            .ok_or(ReplaceError::PositionOutOfRange {
                day,
                position,
                exercises,
            })?;
        Ok(std::mem::replace(slot, replacement))
    }
}

impl From<Vec<DailyPlan>> for WeeklyPlan {
    fn from(value: Vec<DailyPlan>) -> Self {
        Self(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ReplaceError {
    #[error("day {day} out of range (plan has {days} days)")]
    DayOutOfRange { day: usize, days: usize },
    #[error("position {position} out of range (day {day} has {exercises} exercises)")]
    PositionOutOfRange {
        day: usize,
        position: usize,
        exercises: usize,
    },
}

/// Per-muscle rotation state of a single plan generation.
///
/// Every pick advances the cursor of its muscle, so a pool is exhausted before
/// any of its exercises is repeated.
#[derive(Debug, Default)]
pub struct RotationCursor(BTreeMap<Muscle, usize>);

impl RotationCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self, muscle: &Muscle) -> usize {
        self.0.get(muscle).copied().unwrap_or_default()
    }

    /// Takes `quota` exercises from `pool`, wrapping around at its end.
    pub fn take<'a>(
        &mut self,
        muscle: &Muscle,
        pool: &[&'a Name],
        quota: u32,
    ) -> Vec<&'a Name> {
        if pool.is_empty() {
            return vec![];
        }
        let cursor = self.0.entry(muscle.clone()).or_default();
        (0..quota)
            .map(|_| {
                let name = pool[*cursor % pool.len()];
                *cursor += 1;
                name
            })
            .collect()
    }
}

/// Muscle lists of `days` consecutive training days.
#[must_use]
pub fn day_muscles(split: Split, days: usize) -> Vec<&'static [Muscle]> {
    (1..=days).map(|day| split.muscles_for_day(day)).collect()
}

/// Distributes the pooled exercises over the given days.
///
/// Rotation state is shared by all days, so consecutive days receive different
/// exercises of the same muscle as long as its pool allows it.
#[must_use]
pub fn select_plan(
    pools: &MusclePools,
    quotas: &Quotas,
    day_muscles: &[&[Muscle]],
) -> WeeklyPlan {
    let mut cursor = RotationCursor::new();

    day_muscles
        .iter()
        .enumerate()
        .map(|(day, muscles)| {
            let mut exercises = vec![];
            for muscle in *muscles {
                let pool = pools.get(muscle);
                if pool.is_empty() {
                    debug!("no exercises for {} on day {}", muscle.as_ref(), day + 1);
                    continue;
                }
                exercises.extend(
                    cursor
                        .take(muscle, pool, quotas.get(muscle))
                        .into_iter()
                        .cloned(),
                );
            }
            DailyPlan(exercises)
        })
        .collect::<Vec<_>>()
        .into()
}

/// Generates a plan of `days` training days for a user of the given level and equipment.
#[must_use]
pub fn generate_plan(
    catalog: &Catalog,
    level: Level,
    equipment: &BTreeSet<EquipmentID>,
    days: usize,
    split: Split,
) -> WeeklyPlan {
    let filter = EligibilityFilter::new(level, equipment.clone());
    let eligible = filter.exercises(catalog);
    let pools = MusclePools::build(eligible.iter().copied());
    let plan = select_plan(&pools, &split.quotas(), &day_muscles(split, days));

    if plan.is_empty() {
        warn!(
            "no exercises available for level {} with {} pieces of equipment",
            level.as_ref(),
            equipment.len()
        );
    } else {
        debug!(
            "generated {} plan with {} exercises on {} days",
            split.as_ref(),
            plan.total_exercises(),
            days
        );
    }

    plan
}
