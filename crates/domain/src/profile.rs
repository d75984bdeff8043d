use std::{collections::BTreeSet, slice::Iter};

use derive_more::{Display, Into};
use strum::AsRefStr;

use crate::{
    Catalog, EligibilityFilter, EquipmentError, EquipmentID, Goal, Level, Name, Property, Split,
    WeeklyPlan, find_alternatives, generate_plan,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub level: Level,
    pub goal: Goal,
    pub equipment: BTreeSet<EquipmentID>,
    pub days: TrainingDays,
    pub split: Split,
}

impl UserProfile {
    #[must_use]
    pub fn eligibility(&self) -> EligibilityFilter {
        EligibilityFilter::new(self.level, self.equipment.clone())
    }

    #[must_use]
    pub fn generate_plan(&self, catalog: &Catalog) -> WeeklyPlan {
        generate_plan(
            catalog,
            self.level,
            &self.equipment,
            self.days.into(),
            self.split,
        )
    }

    #[must_use]
    pub fn find_alternatives<'a>(
        &self,
        name: &str,
        catalog: &'a Catalog,
        limit: usize,
    ) -> Vec<&'a Name> {
        find_alternatives(name, catalog, self.level, &self.equipment, limit)
    }
}

/// Collects equipment identifiers, ignoring the "none" token.
pub fn equipment_from_ids<'a>(
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<BTreeSet<EquipmentID>, EquipmentError> {
    let mut equipment = BTreeSet::new();
    for id in ids {
        let id = EquipmentID::new(id)?;
        if !id.is_none() {
            equipment.insert(id);
        }
    }
    Ok(equipment)
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
#[into(usize)]
pub struct TrainingDays(usize);

impl TrainingDays {
    pub const MAX: usize = 7;

    pub fn new(value: usize) -> Result<Self, TrainingDaysError> {
        if !(1..=Self::MAX).contains(&value) {
            return Err(TrainingDaysError::OutOfRange(value));
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for TrainingDays {
    type Error = TrainingDaysError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<usize>() {
            Ok(parsed_value) => TrainingDays::new(parsed_value),
            Err(_) => Err(TrainingDaysError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrainingDaysError {
    #[error("Training days must be in the range 1 to 7 ({0})")]
    OutOfRange(usize),
    #[error("Training days must be an integer")]
    ParseError,
}

/// Where the user trains. Determines the preselected equipment.
#[derive(AsRefStr, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    #[default]
    Home,
    LimitedEquipmentGym,
    WellEquippedGym,
    Outdoor,
    Travel,
    BodyweightOnly,
}

impl Location {
    #[must_use]
    pub fn default_equipment(self) -> BTreeSet<EquipmentID> {
        let ids: &[&'static str] = match self {
            Location::Home => &["yoga mat", "dumbbells", "resistance bands", "pull-up bar"],
            Location::LimitedEquipmentGym => &[
                "dumbbells",
                "barbell",
                "bench",
                "pull-up bar",
                "kettlebells",
                "yoga mat",
                "foam roller",
            ],
            Location::WellEquippedGym => &[
                "dumbbells",
                "barbell",
                "bench",
                "pull-up bar",
                "cable machine",
                "power rack",
                "smith machine",
                "kettlebells",
                "yoga mat",
                "foam roller",
                "medicine ball",
                "exercise ball",
            ],
            Location::Outdoor => &["pull-up bar", "resistance bands", "yoga mat"],
            Location::Travel => &["resistance bands", "yoga mat"],
            Location::BodyweightOnly => &[],
        };
        ids.iter().copied().map(EquipmentID::from_static).collect()
    }
}

impl Property for Location {
    fn iter() -> Iter<'static, Location> {
        static LOCATIONS: [Location; 6] = [
            Location::Home,
            Location::LimitedEquipmentGym,
            Location::WellEquippedGym,
            Location::Outdoor,
            Location::Travel,
            Location::BodyweightOnly,
        ];
        LOCATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Location::Home => "Home Gym",
            Location::LimitedEquipmentGym => "Limited Equipment Gym",
            Location::WellEquippedGym => "Well Equipped Gym",
            Location::Outdoor => "Outdoor Training",
            Location::Travel => "Travel / Hotel Room",
            Location::BodyweightOnly => "Bodyweight Only",
        }
    }
}

impl TryFrom<&str> for Location {
    type Error = LocationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let token = value.trim();
        Location::iter()
            .find(|location| location.as_ref() == token)
            .copied()
            .ok_or_else(|| LocationError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LocationError {
    #[error("Invalid location \"{0}\"")]
    Invalid(String),
}

/// Selectable piece of equipment as offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentOption {
    pub id: EquipmentID,
    pub name: String,
}

/// Options offered when the data source does not define any.
#[must_use]
pub fn default_equipment_options() -> Vec<EquipmentOption> {
    [
        ("none", "None"),
        ("yoga mat", "Yoga Mat"),
        ("dumbbells", "Dumbbells"),
        ("resistance bands", "Resistance Bands"),
        ("pull-up bar", "Pull-up Bar"),
        ("kettlebells", "Kettlebells"),
        ("barbell", "Barbell"),
        ("cable machine", "Cable Machine"),
        ("foam roller", "Foam Roller"),
        ("medicine ball", "Medicine Ball"),
        ("suspension trainer", "Suspension Trainer (TRX)"),
        ("exercise ball", "Exercise Ball"),
        ("bench", "Workout Bench"),
        ("power rack", "Power Rack"),
        ("smith machine", "Smith Machine"),
    ]
    .into_iter()
    .map(|(id, name)| EquipmentOption {
        id: EquipmentID::from_static(id),
        name: name.to_string(),
    })
    .collect()
}
