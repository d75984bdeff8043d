use log::{debug, error, warn};

use crate::{
    CatalogRepository, EquipmentOption, Goal, Level, Name, ReadError, StorageError, UserProfile,
    WeeklyPlan, default_equipment_options,
};

pub trait PlanService {
    fn generate_plan(&self, profile: &UserProfile) -> Result<WeeklyPlan, ReadError>;
    fn find_alternatives(
        &self,
        name: &str,
        profile: &UserProfile,
        limit: usize,
    ) -> Result<Vec<Name>, ReadError>;
    fn set_rep_scheme(&self, goal: Goal, level: Level) -> Result<String, ReadError>;
    fn equipment_options(&self) -> Result<Vec<EquipmentOption>, ReadError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NotFound(_)) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> PlanService for Service<R> {
    fn generate_plan(&self, profile: &UserProfile) -> Result<WeeklyPlan, ReadError> {
        let catalog = log_on_error!(self.repository.read_catalog(), "read", "catalog")?;
        Ok(profile.generate_plan(&catalog))
    }

    fn find_alternatives(
        &self,
        name: &str,
        profile: &UserProfile,
        limit: usize,
    ) -> Result<Vec<Name>, ReadError> {
        let catalog = log_on_error!(self.repository.read_catalog(), "read", "catalog")?;
        Ok(profile
            .find_alternatives(name, &catalog, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    fn set_rep_scheme(&self, goal: Goal, level: Level) -> Result<String, ReadError> {
        let table = log_on_error!(
            self.repository.read_set_rep_table(),
            "read",
            "set/rep table"
        )?;
        Ok(table.scheme(goal, level).to_string())
    }

    fn equipment_options(&self) -> Result<Vec<EquipmentOption>, ReadError> {
        let options = log_on_error!(
            self.repository.read_equipment_options(),
            "read",
            "equipment options"
        )?;
        if options.is_empty() {
            debug!("no equipment options defined, using built-in options");
            return Ok(default_equipment_options());
        }
        Ok(options)
    }
}
