use std::collections::HashMap;

use crate::{EquipmentOption, Exercise, Name, ReadError, SetRepTable};

pub trait CatalogRepository {
    fn read_catalog(&self) -> Result<Catalog, ReadError>;
    fn read_set_rep_table(&self) -> Result<SetRepTable, ReadError>;
    fn read_equipment_options(&self) -> Result<Vec<EquipmentOption>, ReadError>;
}

/// Read-only exercise collection keyed by name.
///
/// Iteration yields exercises in insertion order, which is the order of the
/// underlying data source. Plan generation relies on this order being stable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: HashMap<Name, usize>,
}

impl Catalog {
    pub fn new(exercises: impl IntoIterator<Item = Exercise>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();

        for exercise in exercises {
            if catalog.index.contains_key(&exercise.name) {
                return Err(CatalogError::DuplicateName(exercise.name));
            }
            catalog
                .index
                .insert(exercise.name.clone(), catalog.exercises.len());
            catalog.exercises.push(exercise);
        }

        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Exercise> {
        self.index.get(name).map(|i| &self.exercises[*i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.exercises.iter().map(|e| &e.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Edges `(prerequisite, exercise)` of the progression graph.
    ///
    /// Prerequisites that are not part of the catalog are left out.
    #[must_use]
    pub fn progression(&self) -> Vec<(&Name, &Name)> {
        let mut edges = vec![];
        for exercise in &self.exercises {
            for prerequisite in &exercise.prerequisites {
                if self.contains(prerequisite.as_str()) {
                    edges.push((prerequisite, &exercise.name));
                }
            }
        }
        edges
    }

    /// Pairs `(exercise, prerequisite)` whose prerequisite is missing from the catalog.
    #[must_use]
    pub fn unknown_prerequisites(&self) -> Vec<(&Name, &Name)> {
        let mut missing = vec![];
        for exercise in &self.exercises {
            for prerequisite in &exercise.prerequisites {
                if !self.contains(prerequisite.as_str()) {
                    missing.push((&exercise.name, prerequisite));
                }
            }
        }
        missing
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate exercise \"{0}\"")]
    DuplicateName(Name),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Level, Muscle, tests::data};

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = data::catalog();

        assert_eq!(
            catalog.names().map(Name::as_str).collect::<Vec<_>>(),
            data::EXERCISES
                .iter()
                .map(|(name, ..)| *name)
                .collect::<Vec<_>>()
        );
        assert_eq!(catalog.len(), data::EXERCISES.len());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_get() {
        let catalog = data::catalog();

        assert_eq!(
            catalog.get("Push Up").map(|e| (e.level, e.muscle.clone())),
            Some((Level::Beginner, Muscle::Chest))
        );
        assert!(catalog.get("Moon Walk").is_none());
        assert!(catalog.contains("Pull Up"));
    }

    #[test]
    fn test_catalog_duplicate_name() {
        assert_eq!(
            Catalog::new([
                data::exercise("Plank", Level::Beginner, Muscle::Core, &[]),
                data::exercise("Plank", Level::Advanced, Muscle::Core, &[]),
            ]),
            Err(CatalogError::DuplicateName(Name::new("Plank").unwrap()))
        );
    }

    #[test]
    fn test_catalog_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_catalog_progression() {
        let catalog = Catalog::new([
            data::exercise("Knee Push Up", Level::Beginner, Muscle::Chest, &[]),
            data::exercise("Push Up", Level::Beginner, Muscle::Chest, &[])
                .with_prerequisites([Name::new("Knee Push Up").unwrap()]),
            data::exercise("Archer Push Up", Level::Advanced, Muscle::Chest, &[])
                .with_prerequisites([
                    Name::new("Push Up").unwrap(),
                    Name::new("Wall Push Up").unwrap(),
                ]),
        ])
        .unwrap();

        assert_eq!(
            catalog
                .progression()
                .into_iter()
                .map(|(p, e)| (p.as_str(), e.as_str()))
                .collect::<Vec<_>>(),
            vec![("Knee Push Up", "Push Up"), ("Push Up", "Archer Push Up")]
        );
        assert_eq!(
            catalog
                .unknown_prerequisites()
                .into_iter()
                .map(|(e, p)| (e.as_str(), p.as_str()))
                .collect::<Vec<_>>(),
            vec![("Archer Push Up", "Wall Push Up")]
        );
    }
}
