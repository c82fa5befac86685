use serde::{Deserialize, Serialize};

use super::item_type::{ItemCategory, ItemInfluence, ItemRarity};
use super::modifier::{ItemModifier, RollRange};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSockets {
    /// Number of white sockets.
    pub white: u32,
    /// Size of the largest linked group, only ever 5 or 6.
    pub linked: Option<u8>,
}

/// Numeric properties read from the tooltip's non-affix sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemProperties {
    pub map_tier: Option<u32>,
    pub map_blighted: bool,
    pub gem_level: Option<u32>,
    pub armour: Option<u32>,
    pub evasion: Option<u32>,
    pub energy_shield: Option<u32>,
    pub block_chance: Option<u32>,
    pub crit_chance: Option<f64>,
    pub attack_speed: Option<f64>,
    pub physical_damage: Option<RollRange>,
    /// Sum of the per-element damage midpoints.
    pub elemental_damage: Option<f64>,
}

/// A fully parsed item tooltip. Built up by the parser pipeline and handed
/// to the caller by value; a new parse always produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    pub rarity: ItemRarity,
    pub name: String,
    pub base_type: Option<String>,
    pub category: Option<ItemCategory>,
    pub icon: Option<String>,
    pub item_level: Option<u32>,
    pub quality: Option<u32>,
    pub stack_size: Option<u32>,
    pub is_unidentified: bool,
    pub is_corrupted: bool,
    pub influences: Vec<ItemInfluence>,
    pub sockets: ItemSockets,
    pub props: ItemProperties,
    pub modifiers: Vec<ItemModifier>,
    pub raw_text: String,
}

impl ParsedItem {
    pub(crate) fn new(rarity: ItemRarity, name: String, base_type: Option<String>) -> Self {
        Self {
            rarity,
            name,
            base_type,
            category: None,
            icon: None,
            item_level: None,
            quality: None,
            stack_size: None,
            is_unidentified: false,
            is_corrupted: false,
            influences: Vec::new(),
            sockets: ItemSockets::default(),
            props: ItemProperties::default(),
            modifiers: Vec::new(),
            raw_text: String::new(),
        }
    }

    /// The identity used for base-type lookups: magic and rare items carry
    /// the base on its own line, everything else only has the name.
    pub fn base_or_name(&self) -> &str {
        self.base_type.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = ParsedItem::new(
            ItemRarity::Rare,
            "Brood Visor".to_string(),
            Some("Hubris Circlet".to_string()),
        );
        assert_eq!(item.rarity, ItemRarity::Rare);
        assert!(!item.is_corrupted);
        assert!(item.modifiers.is_empty());
        assert_eq!(item.base_or_name(), "Hubris Circlet");
    }

    #[test]
    fn test_base_or_name_falls_back_to_name() {
        let item = ParsedItem::new(ItemRarity::Currency, "Divine Orb".to_string(), None);
        assert_eq!(item.base_or_name(), "Divine Orb");
    }
}
