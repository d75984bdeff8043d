use std::{collections::BTreeMap, slice::Iter};

use strum::AsRefStr;

use crate::{Muscle, Property};

#[derive(AsRefStr, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Split {
    /// Every day trains every muscle.
    #[strum(serialize = "FB")]
    FullBody,
    /// Odd days train the push muscles, even days the pull muscles and legs.
    #[strum(serialize = "AB")]
    AB,
}

static FULL_BODY: [Muscle; 7] = Muscle::KNOWN;
static DAY_A: [Muscle; 4] = [Muscle::Chest, Muscle::Triceps, Muscle::Shoulders, Muscle::Core];
static DAY_B: [Muscle; 4] = [Muscle::Back, Muscle::Legs, Muscle::Biceps, Muscle::Core];

impl Split {
    /// Muscles trained on the given 1-based day, in training order.
    #[must_use]
    pub fn muscles_for_day(self, day: usize) -> &'static [Muscle] {
        match self {
            Split::FullBody => &FULL_BODY,
            Split::AB => {
                if day % 2 == 1 {
                    &DAY_A
                } else {
                    &DAY_B
                }
            }
        }
    }

    /// Number of exercises per muscle and day.
    #[must_use]
    pub fn quotas(self) -> Quotas {
        Quotas(match self {
            Split::FullBody => BTreeMap::from([
                (Muscle::Chest, 2),
                (Muscle::Back, 2),
                (Muscle::Legs, 2),
                (Muscle::Shoulders, 1),
                (Muscle::Biceps, 1),
                (Muscle::Triceps, 1),
                (Muscle::Core, 1),
            ]),
            Split::AB => BTreeMap::from([
                (Muscle::Chest, 2),
                (Muscle::Triceps, 1),
                (Muscle::Shoulders, 1),
                (Muscle::Core, 1),
                (Muscle::Back, 2),
                (Muscle::Legs, 2),
                (Muscle::Biceps, 1),
            ]),
        })
    }

    /// Number of days after which the muscle lists repeat.
    #[must_use]
    pub fn cycle_len(self) -> usize {
        match self {
            Split::FullBody => 1,
            Split::AB => 2,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Split::FullBody => "Recommended for beginners",
            Split::AB => "Recommended for intermediate and advanced",
        }
    }
}

impl Property for Split {
    fn iter() -> Iter<'static, Split> {
        static SPLITS: [Split; 2] = [Split::FullBody, Split::AB];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Split::FullBody => "Full Body",
            Split::AB => "A/B Split",
        }
    }
}

impl TryFrom<&str> for Split {
    type Error = SplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let token = value.trim();
        Split::iter()
            .find(|split| split.as_ref() == token)
            .copied()
            .ok_or_else(|| SplitError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("Invalid split \"{0}\" (expected FB or AB)")]
    Invalid(String),
}

/// Exercises per muscle and training day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Quotas(BTreeMap<Muscle, u32>);

impl Quotas {
    pub const DEFAULT: u32 = 1;

    /// Quota of the given muscle, [`Quotas::DEFAULT`] if the table has no entry.
    #[must_use]
    pub fn get(&self, muscle: &Muscle) -> u32 {
        self.0.get(muscle).copied().unwrap_or(Self::DEFAULT)
    }
}

impl From<BTreeMap<Muscle, u32>> for Quotas {
    fn from(value: BTreeMap<Muscle, u32>) -> Self {
        Self(value)
    }
}
