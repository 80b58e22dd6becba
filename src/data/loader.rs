//! Load category catalogs from JSON data files. Graceful fallback when a file is missing.
//! Each file is `{ "data_version"?: "...", "<collection_key>": [ ...records ] }`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::data::category::Category;
use crate::data::data_registry::{Catalog, Catalogs};
use crate::data::error::CatalogError;
use crate::data::record::{
    Buff, Character, Entity, Item, ItemGroup, Mode, Record, SpecialSkill,
};

pub const DEFAULT_DATA_DIR: &str = "data";

/// Load every category from `data_dir`. Missing files produce empty catalogs.
pub fn load_catalogs(data_dir: impl AsRef<Path>) -> Result<Catalogs, CatalogError> {
    let data_dir = data_dir.as_ref();
    let mut catalogs = Catalogs::empty();
    for category in Category::PRIORITY {
        if let Some(catalog) = load_catalog(data_dir, category)? {
            catalogs.insert(catalog);
        }
    }
    info!(
        data_dir = %data_dir.display(),
        records = catalogs.total_records(),
        "catalogs loaded"
    );
    Ok(catalogs)
}

/// Load one category file. Returns Ok(None) if the file does not exist.
pub fn load_catalog(data_dir: &Path, category: Category) -> Result<Option<Catalog>, CatalogError> {
    let path = data_dir.join(category.file_name());
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), %category, "catalog file missing, using empty catalog");
            return Ok(None);
        }
        Err(source) => return Err(CatalogError::Io { path, source }),
    };
    let catalog = parse_catalog(category, &raw, &path)?;
    debug!(%category, count = catalog.len(), "catalog parsed");
    Ok(Some(catalog))
}

/// Parse catalog JSON for `category`. `path` is only used for error messages.
pub fn parse_catalog(category: Category, raw: &str, path: &Path) -> Result<Catalog, CatalogError> {
    let mut root: Value = serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let data_version = root
        .get("data_version")
        .and_then(Value::as_str)
        .map(str::to_string);

    let key = category.collection_key();
    let collection = root
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| CatalogError::MissingCollection {
            path: path.to_path_buf(),
            key,
        })?;

    let records = match category {
        Category::Characters => records_of::<Character>(collection, path)?,
        Category::Items => records_of::<Item>(collection, path)?,
        Category::ItemGroups => records_of::<ItemGroup>(collection, path)?,
        Category::Buffs => records_of::<Buff>(collection, path)?,
        Category::SpecialSkills => records_of::<SpecialSkill>(collection, path)?,
        Category::Modes => records_of::<Mode>(collection, path)?,
        Category::Entities => records_of::<Entity>(collection, path)?,
    };

    Catalog::from_records(category, records, data_version)
}

fn records_of<T>(collection: Value, path: &Path) -> Result<Vec<Record>, CatalogError>
where
    T: DeserializeOwned + Into<Record>,
{
    let parsed: Vec<T> = serde_json::from_value(collection).map_err(|source| CatalogError::Parse {
        path: PathBuf::from(path),
        source,
    })?;
    Ok(parsed.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::CatalogEntry;

    #[test]
    fn parses_records_and_version() {
        let raw = r#"{"data_version":"2024-08","buffs":[{"name":"眩晕","buff_type":"negative"},{"name":"加速"}]}"#;
        let catalog = parse_catalog(Category::Buffs, raw, Path::new("buffs.json")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.data_version(), Some("2024-08"));
        assert_eq!(catalog.get("加速").unwrap().canonical_path(), "/buffs/加速");
    }

    #[test]
    fn missing_collection_key_is_an_error() {
        let err = parse_catalog(Category::Modes, r#"{"items":[]}"#, Path::new("modes.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingCollection { key: "modes", .. }));
    }

    #[test]
    fn malformed_record_is_a_parse_error() {
        let raw = r#"{"characters":[{"name":"汤姆","faction":"dog"}]}"#;
        let err = parse_catalog(Category::Characters, raw, Path::new("characters.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
