//! Startup-loaded catalog registry for the resolver and server.
//! Load once at startup, share via Arc with handlers; never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::category::Category;
use crate::data::error::CatalogError;
use crate::data::record::{CatalogEntry, Record};

/// Name -> record table for a single category. Keeps data-file order for listing.
#[derive(Debug, Clone)]
pub struct Catalog {
    category: Category,
    data_version: Option<String>,
    records: Vec<Record>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn empty(category: Category) -> Self {
        Catalog {
            category,
            data_version: None,
            records: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Build a catalog, rejecting empty names, duplicate names and records of another category.
    pub fn from_records(
        category: Category,
        records: Vec<Record>,
        data_version: Option<String>,
    ) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if record.category() != category {
                return Err(CatalogError::WrongCategory {
                    expected: category,
                    found: record.category(),
                    name: record.name().to_string(),
                });
            }
            if record.name().trim().is_empty() {
                return Err(CatalogError::EmptyName { category });
            }
            if by_name.insert(record.name().to_string(), idx).is_some() {
                return Err(CatalogError::DuplicateName {
                    category,
                    name: record.name().to_string(),
                });
            }
        }
        Ok(Catalog {
            category,
            data_version,
            records,
            by_name,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn data_version(&self) -> Option<&str> {
        self.data_version.as_deref()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.by_name.get(name).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub category: Category,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
}

/// Read-only set of all category catalogs, stored in priority order.
#[derive(Debug, Clone)]
pub struct Catalogs {
    catalogs: Vec<Catalog>,
    loaded_at: DateTime<Utc>,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalogs {
    pub fn empty() -> Self {
        Catalogs {
            catalogs: Category::PRIORITY.iter().map(|&c| Catalog::empty(c)).collect(),
            loaded_at: Utc::now(),
        }
    }

    /// Group mixed records by category. Each category gets its own duplicate check.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self, CatalogError> {
        let mut grouped: Vec<Vec<Record>> = Category::PRIORITY.iter().map(|_| Vec::new()).collect();
        for record in records {
            grouped[record.category().priority()].push(record);
        }
        let mut catalogs = Catalogs::empty();
        for (category, records) in Category::PRIORITY.into_iter().zip(grouped) {
            catalogs.insert(Catalog::from_records(category, records, None)?);
        }
        Ok(catalogs)
    }

    /// Replace the catalog for `catalog.category()`.
    pub fn insert(&mut self, catalog: Catalog) {
        let slot = catalog.category().priority();
        self.catalogs[slot] = catalog;
    }

    pub fn into_shared(self) -> Arc<Catalogs> {
        Arc::new(self)
    }

    pub fn catalog(&self, category: Category) -> &Catalog {
        &self.catalogs[category.priority()]
    }

    /// Catalogs in goto priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.catalogs.iter()
    }

    /// Record for `name` in `category`, or the first hit in priority order when no category is given.
    pub fn find(&self, name: &str, category: Option<Category>) -> Option<&Record> {
        match category {
            Some(category) => self.catalog(category).get(name),
            None => self.catalogs.iter().find_map(|catalog| catalog.get(name)),
        }
    }

    /// Every category holding `name`, in priority order.
    pub fn categories_for(&self, name: &str) -> Vec<Category> {
        self.catalogs
            .iter()
            .filter(|catalog| catalog.contains(name))
            .map(Catalog::category)
            .collect()
    }

    pub fn total_records(&self) -> usize {
        self.catalogs.iter().map(Catalog::len).sum()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn summary(&self) -> Vec<CatalogSummary> {
        self.catalogs
            .iter()
            .map(|catalog| CatalogSummary {
                category: catalog.category(),
                count: catalog.len(),
                data_version: catalog.data_version().map(str::to_string),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::category::Faction;
    use crate::data::record::{Character, Entity, Item};

    fn item(name: &str) -> Record {
        Record::from(Item {
            name: name.into(),
            item_type: None,
        })
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Catalog::from_records(Category::Items, vec![item("奶酪"), item("奶酪")], None)
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = Catalog::from_records(Category::Items, vec![item("  ")], None).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { category: Category::Items }));
    }

    #[test]
    fn records_must_match_catalog_category() {
        let err = Catalog::from_records(Category::Buffs, vec![item("奶酪")], None).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::WrongCategory {
                expected: Category::Buffs,
                found: Category::Items,
                ..
            }
        ));
    }

    #[test]
    fn find_prefers_earlier_category() {
        let catalogs = Catalogs::from_records(vec![
            Record::from(Entity {
                name: "老鼠夹".into(),
                source: None,
            }),
            item("老鼠夹"),
            Record::from(Character {
                name: "汤姆".into(),
                faction: Faction::Cat,
                description: None,
            }),
        ])
        .unwrap();

        let hit = catalogs.find("老鼠夹", None).unwrap();
        assert_eq!(hit.category(), Category::Items);
        assert_eq!(
            catalogs.categories_for("老鼠夹"),
            vec![Category::Items, Category::Entities]
        );
        assert_eq!(catalogs.total_records(), 3);
    }
}
