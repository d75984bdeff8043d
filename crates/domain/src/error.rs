#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("catalog not found: {0}")]
    NotFound(String),
    #[error("malformed catalog: {0}")]
    Malformed(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::CatalogError> for ReadError {
    fn from(value: crate::CatalogError) -> Self {
        ReadError::Storage(StorageError::Malformed(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogError, Name};

    #[test]
    fn test_read_error_from_catalog_error() {
        assert!(matches!(
            ReadError::from(CatalogError::DuplicateName(Name::new("Plank").unwrap())),
            ReadError::Storage(StorageError::Malformed(message)) if message == "duplicate exercise \"Plank\""
        ));
    }

    #[test]
    fn test_read_error_display() {
        assert_eq!(
            ReadError::from(StorageError::NotFound("data/exercises.json".to_string())).to_string(),
            "catalog not found: data/exercises.json"
        );
        assert_eq!(ReadError::Other("foo".into()).to_string(), "foo");
    }
}
