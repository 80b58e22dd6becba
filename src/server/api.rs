use serde::Serialize;

use crate::data::{Catalogs, CatalogEntry, Category, CatalogSummary};
use crate::resolve::resolve_str;

pub fn health_payload(catalogs: &Catalogs) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "tjwiki",
        "version": env!("CARGO_PKG_VERSION"),
        "records": catalogs.total_records(),
    }))
}

/// JSON goto variant: `{"url": ...}` on a hit, `null` otherwise. Description modes are not applied.
pub fn goto_payload(
    catalogs: &Catalogs,
    name: &str,
    category: Option<&str>,
) -> Result<String, serde_json::Error> {
    let resolution = resolve_str(catalogs, name, category, None);
    serde_json::to_string(&resolution)
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogsResponse {
    pub loaded_at: String,
    pub total: usize,
    pub catalogs: Vec<CatalogSummary>,
}

pub fn catalogs_payload(catalogs: &Catalogs) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CatalogsResponse {
        loaded_at: catalogs.loaded_at().to_rfc3339(),
        total: catalogs.total_records(),
        catalogs: catalogs.summary(),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListResponse {
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    pub entries: Vec<CatalogListItem>,
}

pub fn catalog_entries_payload(
    catalogs: &Catalogs,
    category: Category,
) -> Result<String, serde_json::Error> {
    let catalog = catalogs.catalog(category);
    let entries = catalog
        .records()
        .iter()
        .map(|record| CatalogListItem {
            name: record.name().to_string(),
            url: record.canonical_path(),
        })
        .collect();
    serde_json::to_string_pretty(&CatalogListResponse {
        category,
        data_version: catalog.data_version().map(str::to_string),
        entries,
    })
}
