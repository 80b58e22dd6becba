use std::path::PathBuf;

use thiserror::Error;

use crate::data::category::Category;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: missing '{key}' array", .path.display())]
    MissingCollection { path: PathBuf, key: &'static str },
    #[error("duplicate {category} name '{name}'")]
    DuplicateName { category: Category, name: String },
    #[error("{category} record with empty name")]
    EmptyName { category: Category },
    #[error("{found} record '{name}' placed in {expected} catalog")]
    WrongCategory {
        expected: Category,
        found: Category,
        name: String,
    },
}
