use std::{collections::BTreeMap, slice::Iter};

use strum::AsRefStr;

use crate::{Catalog, Level, Muscle, Name, Property, WeeklyPlan};

#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
    WeightLoss,
    Power,
    Flexibility,
    GeneralFitness,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 7] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::Endurance,
            Goal::WeightLoss,
            Goal::Power,
            Goal::Flexibility,
            Goal::GeneralFitness,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy (Muscle Mass)",
            Goal::Endurance => "Endurance",
            Goal::WeightLoss => "Weight Loss",
            Goal::Power => "Power & Explosiveness",
            Goal::Flexibility => "Flexibility & Mobility",
            Goal::GeneralFitness => "General Fitness",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let token = value.trim();
        Goal::iter()
            .find(|goal| goal.as_ref() == token)
            .copied()
            .ok_or_else(|| GoalError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("Invalid goal \"{0}\"")]
    Invalid(String),
}

/// Sets and repetitions per goal and level, e.g. `"3x10-12"`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetRepTable(BTreeMap<(Goal, Level), String>);

impl SetRepTable {
    pub const FALLBACK: &'static str = "3x10-12";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, goal: Goal, level: Level, scheme: impl Into<String>) {
        self.0.insert((goal, level), scheme.into());
    }

    /// Scheme for the given goal and level, [`SetRepTable::FALLBACK`] if there is none.
    #[must_use]
    pub fn scheme(&self, goal: Goal, level: Level) -> &str {
        self.0
            .get(&(goal, level))
            .map_or(Self::FALLBACK, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Annotates every planned exercise with its muscle and scheme.
    #[must_use]
    pub fn prescribe<'a>(
        &'a self,
        plan: &'a WeeklyPlan,
        catalog: &Catalog,
        goal: Goal,
        level: Level,
    ) -> Vec<PlannedExercise<'a>> {
        let scheme = self.scheme(goal, level);
        plan.iter()
            .enumerate()
            .flat_map(|(day, daily_plan)| {
                daily_plan.iter().map(move |name| (day + 1, name))
            })
            .map(|(day, name)| PlannedExercise {
                day,
                muscle: catalog.get(name.as_str()).map(|e| e.muscle.clone()),
                name,
                scheme,
            })
            .collect()
    }
}

impl FromIterator<((Goal, Level), String)> for SetRepTable {
    fn from_iter<T: IntoIterator<Item = ((Goal, Level), String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise<'a> {
    /// 1-based training day.
    pub day: usize,
    pub name: &'a Name,
    pub muscle: Option<Muscle>,
    pub scheme: &'a str,
}
