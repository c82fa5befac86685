use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::info;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::stats::{StatDatabase, StatTemplate};
use crate::errors::Result;
use crate::models::ItemCategory;

/// One entry of the base-type table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTypeEntry {
    pub category: ItemCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

static BUNDLED: Lazy<Database> = Lazy::new(|| {
    Database::bundled().expect("bundled knowledge base is valid")
});

/// The read-only knowledge base consulted during parsing: base types with
/// their categories, stat templates, and the curated name sets. Loaded
/// once and shared by reference across parses.
#[derive(Debug)]
pub struct Database {
    base_types: HashMap<String, BaseTypeEntry>,
    stats: StatDatabase,
    prophecies: HashSet<String>,
    itemised_monsters: HashSet<String>,
}

impl Database {
    /// The data snapshot compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(
            include_str!("../../data/base_types.json"),
            include_str!("../../data/stats.json"),
            include_str!("../../data/prophecies.json"),
            include_str!("../../data/itemised_monsters.json"),
        )
    }

    /// Process-wide instance of the bundled snapshot, loaded on first use.
    pub fn shared() -> &'static Database {
        &BUNDLED
    }

    /// Load the same file set from a directory, for data newer than the
    /// bundled snapshot.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::from_json(
            &fs::read_to_string(dir.join("base_types.json"))?,
            &fs::read_to_string(dir.join("stats.json"))?,
            &fs::read_to_string(dir.join("prophecies.json"))?,
            &fs::read_to_string(dir.join("itemised_monsters.json"))?,
        )
    }

    fn from_json(
        base_types: &str,
        stats: &str,
        prophecies: &str,
        itemised_monsters: &str,
    ) -> Result<Self> {
        let base_types: HashMap<String, BaseTypeEntry> = serde_json::from_str(base_types)?;
        let templates: Vec<StatTemplate> = serde_json::from_str(stats)?;
        let prophecies: HashSet<String> = serde_json::from_str(prophecies)?;
        let itemised_monsters: HashSet<String> = serde_json::from_str(itemised_monsters)?;

        let stats = StatDatabase::from_templates(templates);
        info!(
            "knowledge base loaded: {} base types, {} stats",
            base_types.len(),
            stats.len()
        );

        Ok(Self {
            base_types,
            stats,
            prophecies,
            itemised_monsters,
        })
    }

    pub fn base_type(&self, name: &str) -> Option<&BaseTypeEntry> {
        self.base_types.get(name)
    }

    pub fn stats(&self) -> &StatDatabase {
        &self.stats
    }

    pub fn is_prophecy(&self, name: &str) -> bool {
        self.prophecies.contains(name)
    }

    pub fn is_itemised_monster(&self, name: &str) -> bool {
        self.itemised_monsters.contains(name)
    }
}
