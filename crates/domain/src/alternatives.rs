use std::{cmp::Reverse, collections::BTreeSet};

use crate::{Catalog, EligibilityFilter, EquipmentID, Level, Name};

pub const DEFAULT_ALTERNATIVES: usize = 5;

/// Substitutes for an exercise that train the same muscle and suit the user.
///
/// Exercises of the same level as the original come first, followed by those
/// sharing the most equipment with it. Ties keep catalog order. An unknown
/// exercise has no alternatives.
#[must_use]
pub fn find_alternatives<'a>(
    name: &str,
    catalog: &'a Catalog,
    level: Level,
    equipment: &BTreeSet<EquipmentID>,
    limit: usize,
) -> Vec<&'a Name> {
    let Some(original) = catalog.get(name) else {
        return vec![];
    };
    let filter = EligibilityFilter::new(level, equipment.clone());

    let mut alternatives = catalog
        .iter()
        .filter(|e| e.name != original.name && e.muscle == original.muscle && filter.admits(e))
        .collect::<Vec<_>>();
    alternatives.sort_by_key(|e| {
        (
            usize::from(e.level != original.level),
            Reverse(e.equipment_overlap(original)),
        )
    });

    alternatives
        .into_iter()
        .take(limit)
        .map(|e| &e.name)
        .collect()
}
