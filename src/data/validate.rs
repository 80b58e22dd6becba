//! Cross-catalog consistency checks run by `tjwiki validate`.

use std::collections::HashSet;
use std::fmt;

use crate::data::category::Category;
use crate::data::data_registry::Catalogs;
use crate::data::record::{CatalogEntry, Record};

/// Ordered most to least severe so sorted reports lead with errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding. `context` names the catalog entry, e.g. `items['叉子']`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn push(&mut self, severity: ValidationSeverity, context: &str, message: impl Into<String>) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.to_string(),
            message: message.into(),
        });
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(ValidationSeverity::Error) > 0
    }
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

/// Check references and name hygiene across all catalogs.
pub fn validate_catalogs(catalogs: &Catalogs) -> ValidationReport {
    let mut report = ValidationReport::default();

    for catalog in catalogs.iter() {
        for record in catalog.records() {
            let name = record.name();
            let context = format!("{}['{}']", catalog.category(), name);

            if name.trim() != name {
                report.push(
                    ValidationSeverity::Warning,
                    &context,
                    "name has surrounding whitespace; goto trims input and will never match it",
                );
            }

            match record {
                Record::ItemGroup(group) => {
                    let items = catalogs.catalog(Category::Items);
                    let mut seen = HashSet::new();
                    for member in &group.items {
                        if !items.contains(member) {
                            report.push(
                                ValidationSeverity::Error,
                                &context,
                                format!("member '{member}' is not a known item"),
                            );
                        }
                        if !seen.insert(member.as_str()) {
                            report.push(
                                ValidationSeverity::Warning,
                                &context,
                                format!("member '{member}' listed more than once"),
                            );
                        }
                    }
                }
                Record::Entity(entity) => {
                    if let Some(source) = &entity.source {
                        if catalogs.find(source, None).is_none() {
                            report.push(
                                ValidationSeverity::Warning,
                                &context,
                                format!("source '{source}' is not in any catalog"),
                            );
                        }
                    }
                }
                _ => {}
            }
        }
    }

    report_collisions(catalogs, &mut report);
    report
}

/// Names present in more than one category resolve by priority; list who wins.
fn report_collisions(catalogs: &Catalogs, report: &mut ValidationReport) {
    let mut reported = HashSet::new();
    for catalog in catalogs.iter() {
        for record in catalog.records() {
            let name = record.name();
            if !reported.insert(name) {
                continue;
            }
            let categories = catalogs.categories_for(name);
            if let [winner, rest @ ..] = categories.as_slice() {
                if rest.is_empty() {
                    continue;
                }
                let shadowed = rest
                    .iter()
                    .map(Category::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                report.push(
                    ValidationSeverity::Info,
                    &format!("name '{name}'"),
                    format!("resolves to {winner}; shadowed in {shadowed} unless a category is given"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::category::Faction;
    use crate::data::record::{Character, Entity, Item, ItemGroup};

    fn item(name: &str) -> Record {
        Record::from(Item {
            name: name.into(),
            item_type: None,
        })
    }

    #[test]
    fn flags_unknown_group_members() {
        let catalogs = Catalogs::from_records(vec![
            item("叉子"),
            Record::from(ItemGroup {
                name: "投掷道具".into(),
                items: vec!["叉子".into(), "飞碟".into()],
            }),
        ])
        .unwrap();

        let report = validate_catalogs(&catalogs);
        assert!(report.has_errors());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.message.contains("'飞碟'")));
    }

    #[test]
    fn collisions_are_informational() {
        let catalogs = Catalogs::from_records(vec![
            item("老鼠夹"),
            Record::from(Entity {
                name: "老鼠夹".into(),
                source: Some("老鼠夹".into()),
            }),
        ])
        .unwrap();

        let report = validate_catalogs(&catalogs);
        assert!(!report.has_errors());
        let collision = report
            .diagnostics
            .iter()
            .find(|d| d.severity == ValidationSeverity::Info)
            .expect("collision should be reported");
        assert_eq!(
            collision.message,
            "resolves to items; shadowed in entities unless a category is given"
        );
    }

    #[test]
    fn padded_names_are_flagged() {
        let catalogs = Catalogs::from_records(vec![Record::from(Character {
            name: " 汤姆".into(),
            faction: Faction::Cat,
            description: None,
        })])
        .unwrap();

        let report = validate_catalogs(&catalogs);
        assert!(!report.has_errors());
        assert_eq!(report.count(ValidationSeverity::Warning), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].context, "characters[' 汤姆']");
    }

    #[test]
    fn repeated_group_members_are_flagged_once() {
        let catalogs = Catalogs::from_records(vec![
            item("叉子"),
            Record::from(ItemGroup {
                name: "投掷道具".into(),
                items: vec!["叉子".into(), "叉子".into()],
            }),
        ])
        .unwrap();

        let report = validate_catalogs(&catalogs);
        assert!(!report.has_errors());
        assert_eq!(report.count(ValidationSeverity::Warning), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].message.contains("more than once"));
    }

    #[test]
    fn dangling_entity_source_is_a_warning() {
        let catalogs = Catalogs::from_records(vec![Record::from(Entity {
            name: "火药桶".into(),
            source: Some("海盗杰瑞".into()),
        })])
        .unwrap();

        let report = validate_catalogs(&catalogs);
        assert!(!report.has_errors());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].severity, ValidationSeverity::Warning);
    }
}
