use std::collections::BTreeSet;

use crate::{Catalog, EquipmentID, Exercise, Level};

/// Decides which catalog entries a user is able to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityFilter {
    pub level: Level,
    pub equipment: BTreeSet<EquipmentID>,
}

impl EligibilityFilter {
    #[must_use]
    pub fn new(level: Level, equipment: BTreeSet<EquipmentID>) -> Self {
        Self { level, equipment }
    }

    #[must_use]
    pub fn level_allowed(&self, exercise: &Exercise) -> bool {
        self.level.permits(exercise.level)
    }

    /// Exercises without equipment requirements always pass.
    #[must_use]
    pub fn equipment_allowed(&self, exercise: &Exercise) -> bool {
        exercise.equipment.is_subset(&self.equipment)
    }

    #[must_use]
    pub fn admits(&self, exercise: &Exercise) -> bool {
        self.level_allowed(exercise) && self.equipment_allowed(exercise)
    }

    /// Eligible exercises in catalog order.
    #[must_use]
    pub fn exercises<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Exercise> {
        catalog.iter().filter(|e| self.admits(e)).collect()
    }
}
