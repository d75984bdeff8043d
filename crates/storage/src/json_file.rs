use std::{collections::BTreeMap, fs, path::Path, sync::OnceLock};

use anyhow::Context;
use liftplan_domain as domain;
use log::{debug, warn};

use crate::CatalogSource;

/// Exercise data stored in a JSON file.
///
/// The file is read on first access. Later reads return the same content, even
/// if the file has been changed or removed in the meantime.
#[derive(Debug, Clone, Default)]
pub struct JsonFile {
    source: CatalogSource,
    content: OnceLock<Content>,
}

impl JsonFile {
    #[must_use]
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            content: OnceLock::new(),
        }
    }

    fn content(&self) -> Result<&Content, domain::ReadError> {
        if let Some(content) = self.content.get() {
            return Ok(content);
        }

        let path = self.source.resolve()?;
        let content = Content::try_from(read_data(&path)?)?;
        debug!(
            "read {} exercises from {}",
            content.catalog.len(),
            path.display()
        );

        Ok(self.content.get_or_init(|| content))
    }
}

impl domain::CatalogRepository for JsonFile {
    fn read_catalog(&self) -> Result<domain::Catalog, domain::ReadError> {
        Ok(self.content()?.catalog.clone())
    }

    fn read_set_rep_table(&self) -> Result<domain::SetRepTable, domain::ReadError> {
        Ok(self.content()?.set_rep_table.clone())
    }

    fn read_equipment_options(&self) -> Result<Vec<domain::EquipmentOption>, domain::ReadError> {
        Ok(self.content()?.equipment_options.clone())
    }
}

#[derive(Debug, Clone)]
struct Content {
    catalog: domain::Catalog,
    set_rep_table: domain::SetRepTable,
    equipment_options: Vec<domain::EquipmentOption>,
}

impl TryFrom<Data> for Content {
    type Error = domain::ReadError;

    fn try_from(value: Data) -> Result<Self, Self::Error> {
        Ok(Self {
            catalog: parse_catalog(value.exercises)?,
            set_rep_table: parse_set_rep_table(value.goal_set_rep)?,
            equipment_options: value
                .equipment_options
                .into_iter()
                .map(domain::EquipmentOption::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| domain::StorageError::Malformed(err.to_string()))?,
        })
    }
}

fn read_data(path: &Path) -> Result<Data, domain::StorageError> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
        .map_err(|err| domain::StorageError::Other(err.into()))?;

    serde_json::from_str(&content)
        .map_err(|err| domain::StorageError::Malformed(format!("{}: {err}", path.display())))
}

fn parse_catalog(
    exercises: serde_json::Map<String, serde_json::Value>,
) -> Result<domain::Catalog, domain::ReadError> {
    let mut parsed = Vec::with_capacity(exercises.len());

    for (name, value) in exercises {
        parsed.push(parse_exercise(&name, value).map_err(|err| {
            domain::StorageError::Malformed(format!("exercise \"{name}\": {err}"))
        })?);
    }

    let catalog = domain::Catalog::new(parsed)?;

    for (exercise, prerequisite) in catalog.unknown_prerequisites() {
        warn!("unknown prerequisite \"{prerequisite}\" of \"{exercise}\"");
    }

    Ok(catalog)
}

fn parse_set_rep_table(
    goal_set_rep: BTreeMap<String, BTreeMap<String, String>>,
) -> Result<domain::SetRepTable, domain::StorageError> {
    let mut table = domain::SetRepTable::new();

    for (goal, schemes) in goal_set_rep {
        let goal = domain::Goal::try_from(goal.as_str())
            .map_err(|err| domain::StorageError::Malformed(err.to_string()))?;
        for (level, scheme) in schemes {
            let level = domain::Level::try_from(level.as_str()).map_err(|err| {
                domain::StorageError::Malformed(format!("goal \"{}\": {err}", goal.as_ref()))
            })?;
            table.insert(goal, level, scheme);
        }
    }

    Ok(table)
}

fn parse_exercise(
    name: &str,
    value: serde_json::Value,
) -> Result<domain::Exercise, RecordError> {
    let record = serde_json::from_value::<Exercise>(value)?;
    record.into_exercise(name)
}

#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
struct Data {
    exercises: serde_json::Map<String, serde_json::Value>,
    goal_set_rep: BTreeMap<String, BTreeMap<String, String>>,
    equipment_options: Vec<EquipmentOption>,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct Exercise {
    level: String,
    muscle: String,
    #[serde(default)]
    equipment: Vec<String>,
    #[serde(default)]
    prerequisites: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    tips: Vec<String>,
    #[serde(default)]
    common_mistakes: Vec<String>,
    #[serde(default)]
    video: Option<String>,
}

impl Exercise {
    fn into_exercise(self, name: &str) -> Result<domain::Exercise, RecordError> {
        let mut equipment = vec![];
        for id in &self.equipment {
            let id = domain::EquipmentID::new(id)?;
            if !id.is_none() {
                equipment.push(id);
            }
        }

        let mut exercise = domain::Exercise::new(
            domain::Name::new(name)?,
            domain::Level::try_from(self.level.as_str())?,
            domain::Muscle::try_from(self.muscle.as_str())?,
        )
        .with_equipment(equipment)
        .with_prerequisites(
            self.prerequisites
                .iter()
                .map(|p| domain::Name::new(p))
                .collect::<Result<Vec<_>, _>>()?,
        );
        exercise.details = domain::ExerciseDetails {
            instructions: self.instructions,
            tips: self.tips,
            common_mistakes: self.common_mistakes,
            video: self.video.filter(|v| !v.trim().is_empty()),
        };

        Ok(exercise)
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
struct EquipmentOption {
    id: String,
    name: String,
}

impl TryFrom<EquipmentOption> for domain::EquipmentOption {
    type Error = domain::EquipmentError;

    fn try_from(value: EquipmentOption) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::EquipmentID::new(&value.id)?,
            name: value.name,
        })
    }
}

#[derive(thiserror::Error, Debug)]
enum RecordError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Level(#[from] domain::LevelError),
    #[error(transparent)]
    Muscle(#[from] domain::MuscleError),
    #[error(transparent)]
    Equipment(#[from] domain::EquipmentError),
}
