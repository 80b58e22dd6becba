//! Bundled data under data/ loads cleanly and a tempdir fixture exercises loader edge cases.

use std::fs;
use std::path::Path;

use tjwiki::data::validate::{validate_catalogs, ValidationSeverity};
use tjwiki::data::{load_catalogs, CatalogEntry, CatalogError, Category};
use tjwiki::resolve::{resolve, ResolveOptions};

fn bundled() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
}

#[test]
fn bundled_catalogs_load_every_category() {
    let catalogs = load_catalogs(bundled()).expect("bundled data should load");
    for catalog in catalogs.iter() {
        assert!(!catalog.is_empty(), "{} should have records", catalog.category());
        assert!(catalog.data_version().is_some());
    }
}

#[test]
fn bundled_catalogs_have_no_validation_errors() {
    let catalogs = load_catalogs(bundled()).unwrap();
    let report = validate_catalogs(&catalogs);
    let errors: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.severity == ValidationSeverity::Error)
        .map(ToString::to_string)
        .collect();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn bundled_collision_resolves_by_priority() {
    let catalogs = load_catalogs(bundled()).unwrap();
    let options = ResolveOptions::default();
    assert_eq!(
        catalogs.categories_for("老鼠夹"),
        vec![Category::Items, Category::Entities]
    );
    assert_eq!(
        resolve(&catalogs, "老鼠夹", None, &options).unwrap().url,
        "/items/老鼠夹"
    );
    assert_eq!(
        resolve(&catalogs, "老鼠夹", Some(Category::Entities), &options)
            .unwrap()
            .url,
        "/entities/老鼠夹"
    );
}

#[test]
fn canonical_paths_are_unique_across_catalogs() {
    let catalogs = load_catalogs(bundled()).unwrap();
    let mut seen = std::collections::HashSet::new();
    for catalog in catalogs.iter() {
        for record in catalog.records() {
            assert!(
                seen.insert(record.canonical_path()),
                "duplicate path {}",
                record.canonical_path()
            );
        }
    }
}

#[test]
fn missing_files_yield_empty_catalogs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("modes.json"),
        r#"{"modes":[{"name":"经典模式"}]}"#,
    )
    .unwrap();

    let catalogs = load_catalogs(dir.path()).expect("partial data should load");
    assert_eq!(catalogs.total_records(), 1);
    assert!(catalogs.catalog(Category::Characters).is_empty());
    assert_eq!(catalogs.catalog(Category::Modes).data_version(), None);
}

#[test]
fn duplicate_names_fail_the_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("buffs.json"),
        r#"{"buffs":[{"name":"眩晕"},{"name":"眩晕"}]}"#,
    )
    .unwrap();

    let err = load_catalogs(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DuplicateName {
            category: Category::Buffs,
            ..
        }
    ));
    assert_eq!(err.to_string(), "duplicate buffs name '眩晕'");
}
