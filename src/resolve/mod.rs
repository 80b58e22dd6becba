//! Goto resolution: map a free-form name plus optional hints to one canonical page URL.
//!
//! Without a category hint, catalogs are searched in [Category::PRIORITY] order and the first
//! hit wins. With a hint, only that catalog is searched, even if the name exists elsewhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::data::{CatalogEntry, Catalogs, Category, ParseCategoryError, Record};

/// Query parameter carrying the description mode on resolved URLs.
pub const DESC_MODE_PARAM: &str = "descMode";

/// Rendering hint forwarded to the target page. Never used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescMode {
    Description,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid description mode '{0}' (expected 'description' or 'detailed')")]
pub struct ParseDescModeError(pub String);

impl DescMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Detailed => "detailed",
        }
    }
}

impl fmt::Display for DescMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DescMode {
    type Err = ParseDescModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(Self::Description),
            "detailed" => Ok(Self::Detailed),
            other => Err(ParseDescModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub desc_mode: Option<DescMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub url: String,
}

/// Record a goto for `name` lands on. Outer whitespace is ignored; matching is otherwise exact.
pub fn lookup<'a>(
    catalogs: &'a Catalogs,
    name: &str,
    category: Option<Category>,
) -> Option<&'a Record> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let record = catalogs.find(name, category);
    match record {
        Some(record) => debug!(name, matched = %record.category(), "goto: matched"),
        None => debug!(name, ?category, "goto: no match"),
    }
    record
}

/// Append `?descMode=<mode>` to a path that carries no query string yet.
pub fn append_desc_mode(mut path: String, desc_mode: Option<DescMode>) -> String {
    if let Some(mode) = desc_mode {
        path.push('?');
        path.push_str(DESC_MODE_PARAM);
        path.push('=');
        path.push_str(mode.as_str());
    }
    path
}

/// Resolve `name` to a canonical URL.
pub fn resolve(
    catalogs: &Catalogs,
    name: &str,
    category: Option<Category>,
    options: &ResolveOptions,
) -> Option<Resolution> {
    let record = lookup(catalogs, name, category)?;
    Some(Resolution {
        url: append_desc_mode(record.canonical_path(), options.desc_mode),
    })
}

/// Parse raw query hints. An unrecognized category is an error; an unrecognized mode is dropped.
pub fn parse_hints(
    category: Option<&str>,
    desc_mode: Option<&str>,
) -> Result<(Option<Category>, ResolveOptions), ParseCategoryError> {
    let category = category.map(str::parse::<Category>).transpose()?;
    let options = ResolveOptions {
        desc_mode: desc_mode.and_then(|raw| raw.parse().ok()),
    };
    Ok((category, options))
}

/// String-level entry point for callers holding raw query values.
/// An unrecognized category is not-found.
pub fn resolve_str(
    catalogs: &Catalogs,
    name: &str,
    category: Option<&str>,
    desc_mode: Option<&str>,
) -> Option<Resolution> {
    match parse_hints(category, desc_mode) {
        Ok((category, options)) => resolve(catalogs, name, category, &options),
        Err(err) => {
            debug!(name, %err, "goto: rejecting category hint");
            None
        }
    }
}
