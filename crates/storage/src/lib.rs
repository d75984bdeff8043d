#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use liftplan_domain::StorageError;
use log::{debug, warn};

pub mod json_file;

pub use json_file::JsonFile;

/// Location of the exercise data file.
///
/// An explicit path takes precedence. If it does not exist, the default path is used instead.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogSource {
    pub path: Option<PathBuf>,
    pub default_path: PathBuf,
}

impl CatalogSource {
    pub const DEFAULT_PATH: &'static str = "data/exercises.json";

    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Path of the file that should be read.
    pub fn resolve(&self) -> Result<PathBuf, StorageError> {
        if let Some(path) = &self.path {
            if path.exists() {
                debug!("using catalog {}", path.display());
                return Ok(path.clone());
            }
            warn!(
                "catalog {} not found, using {} instead",
                path.display(),
                self.default_path.display()
            );
        }

        if self.default_path.exists() {
            return Ok(self.default_path.clone());
        }

        Err(StorageError::NotFound(
            self.default_path.display().to_string(),
        ))
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self {
            path: None,
            default_path: PathBuf::from(Self::DEFAULT_PATH),
        }
    }
}
