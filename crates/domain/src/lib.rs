#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod alternatives;
mod catalog;
mod eligibility;
mod error;
mod exercise;
mod name;
mod plan;
mod pool;
mod prescription;
mod profile;
mod service;
mod split;

pub use alternatives::{DEFAULT_ALTERNATIVES, find_alternatives};
pub use catalog::{Catalog, CatalogError, CatalogRepository};
pub use eligibility::EligibilityFilter;
pub use error::{ReadError, StorageError};
pub use exercise::{
    EquipmentError, EquipmentID, Exercise, ExerciseDetails, Level, LevelError, Muscle,
    MuscleError, Property,
};
pub use name::{Name, NameError};
pub use plan::{
    DailyPlan, ReplaceError, RotationCursor, WeeklyPlan, day_muscles, generate_plan, select_plan,
};
pub use pool::MusclePools;
pub use prescription::{Goal, GoalError, PlannedExercise, SetRepTable};
pub use profile::{
    EquipmentOption, Location, LocationError, TrainingDays, TrainingDaysError, UserProfile,
    default_equipment_options, equipment_from_ids,
};
pub use service::{PlanService, Service};
pub use split::{Quotas, Split, SplitError};
