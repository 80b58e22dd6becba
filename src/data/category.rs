//! Content categories and factions. Category order doubles as the goto priority order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Characters,
    Items,
    ItemGroups,
    Buffs,
    SpecialSkills,
    Modes,
    Entities,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// Search order for goto lookups without a category hint. Earlier wins on name collisions.
    pub const PRIORITY: [Category; 7] = [
        Category::Characters,
        Category::Items,
        Category::ItemGroups,
        Category::Buffs,
        Category::SpecialSkills,
        Category::Modes,
        Category::Entities,
    ];

    /// Wire tag used in query strings and JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Items => "items",
            Self::ItemGroups => "itemGroups",
            Self::Buffs => "buffs",
            Self::SpecialSkills => "specialSkills",
            Self::Modes => "modes",
            Self::Entities => "entities",
        }
    }

    /// Position in [Category::PRIORITY].
    pub fn priority(&self) -> usize {
        match self {
            Self::Characters => 0,
            Self::Items => 1,
            Self::ItemGroups => 2,
            Self::Buffs => 3,
            Self::SpecialSkills => 4,
            Self::Modes => 5,
            Self::Entities => 6,
        }
    }

    /// Key of the record array inside this category's data file.
    pub fn collection_key(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Items => "items",
            Self::ItemGroups => "item_groups",
            Self::Buffs => "buffs",
            Self::SpecialSkills => "special_skills",
            Self::Modes => "modes",
            Self::Entities => "entities",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.collection_key())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "characters" => Ok(Self::Characters),
            "items" => Ok(Self::Items),
            "itemGroups" | "item-groups" | "item_groups" => Ok(Self::ItemGroups),
            "buffs" => Ok(Self::Buffs),
            "specialSkills" | "special-skills" | "special_skills" => Ok(Self::SpecialSkills),
            "modes" => Ok(Self::Modes),
            "entities" => Ok(Self::Entities),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Cat,
    Mouse,
}

impl Faction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Mouse => "mouse",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
