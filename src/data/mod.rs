//! Content catalogs: typed records per category, JSON loading, and validation.

pub mod category;
pub mod data_registry;
pub mod error;
pub mod loader;
pub mod record;
pub mod validate;

pub use category::{Category, Faction, ParseCategoryError};
pub use data_registry::{Catalog, CatalogSummary, Catalogs};
pub use error::CatalogError;
pub use loader::{load_catalogs, DEFAULT_DATA_DIR};
pub use record::{CatalogEntry, Record};
