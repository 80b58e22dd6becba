//! Typed content records, one struct per category, unified under [Record].

use serde::{Deserialize, Serialize};

use crate::data::category::{Category, Faction};

/// Common surface of every catalog record: a unique name and the page it lives on.
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn category(&self) -> Category;

    /// Unencoded path segments of the record's page. The name is always a single segment.
    fn path_segments(&self) -> Vec<&str>;

    fn canonical_path(&self) -> String {
        let mut path = String::new();
        for segment in self.path_segments() {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub faction: Faction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

/// Named bundle of items (e.g. all throwables). Members are item names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuffType {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buff {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff_type: Option<BuffType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSkill {
    pub name: String,
    pub faction: Faction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Something spawned in a match (trap, barrel, flag). `source` names the character or item behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl CatalogEntry for Character {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Characters
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["factions", self.faction.as_str(), self.name.as_str()]
    }
}

impl CatalogEntry for Item {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Items
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["items", self.name.as_str()]
    }
}

impl CatalogEntry for ItemGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::ItemGroups
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["itemGroups", self.name.as_str()]
    }
}

impl CatalogEntry for Buff {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Buffs
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["buffs", self.name.as_str()]
    }
}

impl CatalogEntry for SpecialSkill {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::SpecialSkills
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["special-skills", self.faction.as_str(), self.name.as_str()]
    }
}

impl CatalogEntry for Mode {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Modes
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["modes", self.name.as_str()]
    }
}

impl CatalogEntry for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Category {
        Category::Entities
    }

    fn path_segments(&self) -> Vec<&str> {
        vec!["entities", self.name.as_str()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Character(Character),
    Item(Item),
    ItemGroup(ItemGroup),
    Buff(Buff),
    SpecialSkill(SpecialSkill),
    Mode(Mode),
    Entity(Entity),
}

impl Record {
    fn entry(&self) -> &dyn CatalogEntry {
        match self {
            Self::Character(r) => r,
            Self::Item(r) => r,
            Self::ItemGroup(r) => r,
            Self::Buff(r) => r,
            Self::SpecialSkill(r) => r,
            Self::Mode(r) => r,
            Self::Entity(r) => r,
        }
    }
}

impl CatalogEntry for Record {
    fn name(&self) -> &str {
        self.entry().name()
    }

    fn category(&self) -> Category {
        self.entry().category()
    }

    fn path_segments(&self) -> Vec<&str> {
        self.entry().path_segments()
    }
}

impl From<Character> for Record {
    fn from(value: Character) -> Self {
        Self::Character(value)
    }
}

impl From<Item> for Record {
    fn from(value: Item) -> Self {
        Self::Item(value)
    }
}

impl From<ItemGroup> for Record {
    fn from(value: ItemGroup) -> Self {
        Self::ItemGroup(value)
    }
}

impl From<Buff> for Record {
    fn from(value: Buff) -> Self {
        Self::Buff(value)
    }
}

impl From<SpecialSkill> for Record {
    fn from(value: SpecialSkill) -> Self {
        Self::SpecialSkill(value)
    }
}

impl From<Mode> for Record {
    fn from(value: Mode) -> Self {
        Self::Mode(value)
    }
}

impl From<Entity> for Record {
    fn from(value: Entity) -> Self {
        Self::Entity(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_follow_category_layout() {
        let tom = Record::from(Character {
            name: "汤姆".into(),
            faction: Faction::Cat,
            description: None,
        });
        assert_eq!(tom.canonical_path(), "/factions/cat/汤姆");
        assert_eq!(tom.category(), Category::Characters);

        let roll = Record::from(SpecialSkill {
            name: "急速翻滚".into(),
            faction: Faction::Mouse,
        });
        assert_eq!(roll.canonical_path(), "/special-skills/mouse/急速翻滚");

        let group = Record::from(ItemGroup {
            name: "投掷道具".into(),
            items: vec![],
        });
        assert_eq!(group.canonical_path(), "/itemGroups/投掷道具");
        assert_eq!(group.path_segments(), vec!["itemGroups", "投掷道具"]);
    }
}
