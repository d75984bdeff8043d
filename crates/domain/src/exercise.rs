use std::{collections::BTreeSet, slice::Iter};

use derive_more::{AsRef, Display};
use strum::AsRefStr;

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub level: Level,
    pub muscle: Muscle,
    pub equipment: BTreeSet<EquipmentID>,
    /// Exercises that should be mastered first. Only used to draw the progression graph.
    pub prerequisites: Vec<Name>,
    pub details: ExerciseDetails,
}

impl Exercise {
    #[must_use]
    pub fn new(name: Name, level: Level, muscle: Muscle) -> Self {
        Self {
            name,
            level,
            muscle,
            equipment: BTreeSet::new(),
            prerequisites: Vec::new(),
            details: ExerciseDetails::default(),
        }
    }

    #[must_use]
    pub fn with_equipment(mut self, equipment: impl IntoIterator<Item = EquipmentID>) -> Self {
        self.equipment.extend(equipment);
        self
    }

    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: impl IntoIterator<Item = Name>) -> Self {
        self.prerequisites.extend(prerequisites);
        self
    }

    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }

    /// Number of equipment items both exercises require.
    #[must_use]
    pub fn equipment_overlap(&self, other: &Exercise) -> usize {
        self.equipment.intersection(&other.equipment).count()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseDetails {
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub video: Option<String>,
}

#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// A user may perform exercises at or below their own level.
    #[must_use]
    pub fn permits(self, required: Level) -> bool {
        self.index() >= required.index()
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Level::Beginner => "No experience",
            Level::Intermediate => "6 months to 2 years training",
            Level::Advanced => "Over 2 years training",
        }
    }
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let token = value.trim();
        Level::iter()
            .find(|level| level.as_ref() == token)
            .copied()
            .ok_or_else(|| LevelError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("Invalid level \"{0}\" (expected beginner, intermediate or advanced)")]
    Invalid(String),
}

/// Primary muscle group targeted by an exercise.
///
/// The groups trained by the splits have their own variants. Any other group
/// is kept as `Other`: such exercises are never planned, but they still have
/// alternatives among exercises of the same group.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Chest,
    Back,
    Legs,
    Triceps,
    Shoulders,
    Core,
    Biceps,
    Other(String),
}

impl Muscle {
    pub const KNOWN: [Muscle; 7] = [
        Muscle::Chest,
        Muscle::Back,
        Muscle::Legs,
        Muscle::Triceps,
        Muscle::Shoulders,
        Muscle::Core,
        Muscle::Biceps,
    ];

    /// Trims and lowercases the token. Unknown groups become `Other`.
    pub fn new(value: &str) -> Result<Self, MuscleError> {
        let token = value.trim().to_lowercase();

        if token.is_empty() {
            return Err(MuscleError::Empty);
        }

        match Muscle::KNOWN.into_iter().find(|m| m.as_str() == token) {
            Some(muscle) => Ok(muscle),
            None => Ok(Muscle::Other(token)),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Muscle::Chest => "chest",
            Muscle::Back => "back",
            Muscle::Legs => "legs",
            Muscle::Triceps => "triceps",
            Muscle::Shoulders => "shoulders",
            Muscle::Core => "core",
            Muscle::Biceps => "biceps",
            Muscle::Other(token) => token,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Back => "Back",
            Muscle::Legs => "Legs",
            Muscle::Triceps => "Triceps",
            Muscle::Shoulders => "Shoulders",
            Muscle::Core => "Core",
            Muscle::Biceps => "Biceps",
            Muscle::Other(token) => token,
        }
    }
}

impl AsRef<str> for Muscle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for Muscle {
    type Error = MuscleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Muscle::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleError {
    #[error("Muscle must not be empty")]
    Empty,
}

/// Identifier of a piece of equipment, e.g. `"dumbbells"` or `"pull-up bar"`.
///
/// Identifiers are trimmed and lowercased, so `"Barbell"` in a profile matches
/// `"barbell"` in the catalog. Comparison is exact on the normalized form.
#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EquipmentID(String);

impl EquipmentID {
    /// Token used by data sources to express "no equipment at all".
    pub const NONE: &'static str = "none";

    pub fn new(id: &str) -> Result<Self, EquipmentError> {
        let id = id.trim().to_lowercase();

        if id.is_empty() {
            return Err(EquipmentError::Empty);
        }

        Ok(Self(id))
    }

    pub(crate) fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("Equipment identifier must not be empty")]
    Empty,
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn equipment(ids: &[&str]) -> Vec<EquipmentID> {
        ids.iter().map(|id| EquipmentID::new(id).unwrap()).collect()
    }

    #[rstest]
    #[case(Level::Beginner, Level::Beginner, true)]
    #[case(Level::Beginner, Level::Intermediate, false)]
    #[case(Level::Beginner, Level::Advanced, false)]
    #[case(Level::Intermediate, Level::Beginner, true)]
    #[case(Level::Intermediate, Level::Advanced, false)]
    #[case(Level::Advanced, Level::Beginner, true)]
    #[case(Level::Advanced, Level::Advanced, true)]
    fn test_level_permits(#[case] user: Level, #[case] required: Level, #[case] expected: bool) {
        assert_eq!(user.permits(required), expected);
    }

    #[rstest]
    #[case("beginner", Ok(Level::Beginner))]
    #[case(" intermediate ", Ok(Level::Intermediate))]
    #[case("advanced", Ok(Level::Advanced))]
    #[case("expert", Err(LevelError::Invalid("expert".to_string())))]
    fn test_level_try_from_str(#[case] value: &str, #[case] expected: Result<Level, LevelError>) {
        assert_eq!(Level::try_from(value), expected);
    }

    #[test]
    fn test_level_iter() {
        assert_eq!(
            Level::iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>(),
            vec!["beginner", "intermediate", "advanced"]
        );
        assert_eq!(
            Level::iter().map(|l| l.index()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_level_description() {
        let descriptions = Level::iter()
            .map(|l| l.description())
            .collect::<HashSet<_>>();

        assert_eq!(descriptions.len(), 3);
        assert_eq!(Level::Beginner.description(), "No experience");
    }

    #[rstest]
    #[case("chest", Ok(Muscle::Chest))]
    #[case(" Core ", Ok(Muscle::Core))]
    #[case("biceps", Ok(Muscle::Biceps))]
    #[case("Calves", Ok(Muscle::Other("calves".to_string())))]
    #[case("  ", Err(MuscleError::Empty))]
    fn test_muscle_try_from_str(
        #[case] value: &str,
        #[case] expected: Result<Muscle, MuscleError>,
    ) {
        assert_eq!(Muscle::try_from(value), expected);
    }

    #[test]
    fn test_muscle_as_str_roundtrip() {
        for muscle in Muscle::KNOWN {
            assert_eq!(Muscle::new(muscle.as_str()), Ok(muscle));
        }
        assert_eq!(Muscle::new("glutes").unwrap().as_str(), "glutes");
    }

    #[test]
    fn test_muscle_name() {
        let mut names = HashSet::new();

        for muscle in &Muscle::KNOWN {
            let name = muscle.name().to_string();

            assert!(!name.is_empty());
            assert!(!names.contains(&name));

            names.insert(name);
        }
        assert_eq!(Muscle::Other("calves".to_string()).name(), "calves");
    }

    #[rstest]
    #[case("Dumbbells", Ok("dumbbells"))]
    #[case("  pull-up bar ", Ok("pull-up bar"))]
    #[case("", Err(EquipmentError::Empty))]
    fn test_equipment_id_new(#[case] id: &str, #[case] expected: Result<&str, EquipmentError>) {
        assert_eq!(
            EquipmentID::new(id).as_ref().map(EquipmentID::as_str),
            expected.as_ref().map(|id| *id)
        );
    }

    #[test]
    fn test_equipment_id_is_none() {
        assert!(EquipmentID::new("None").unwrap().is_none());
        assert!(!EquipmentID::new("barbell").unwrap().is_none());
    }

    #[test]
    fn test_exercise_equipment_overlap() {
        let a = Exercise::new(Name::new("A").unwrap(), Level::Beginner, Muscle::Chest)
            .with_equipment(equipment(&["bench", "dumbbells"]));
        let b = Exercise::new(Name::new("B").unwrap(), Level::Beginner, Muscle::Chest)
            .with_equipment(equipment(&["barbell", "bench"]));
        let c = Exercise::new(Name::new("C").unwrap(), Level::Beginner, Muscle::Chest);

        assert_eq!(a.equipment_overlap(&b), 1);
        assert_eq!(a.equipment_overlap(&c), 0);
        assert!(c.is_bodyweight());
        assert!(!a.is_bodyweight());
    }
}
