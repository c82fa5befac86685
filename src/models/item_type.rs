use serde::{Deserialize, Serialize};

/// Rarity tier shown on the first line of the name-plate. Controls which
/// pipeline stages apply to the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemRarity {
    Currency,
    #[serde(rename = "Divination Card")]
    DivinationCard,
    Gem,
    Normal,
    Magic,
    Rare,
    Unique,
}

impl ItemRarity {
    /// Parse the value of a `Rarity: <Kind>` tag. Unknown kinds mean the
    /// clipboard does not hold an item.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Currency" => Some(ItemRarity::Currency),
            "Divination Card" => Some(ItemRarity::DivinationCard),
            "Gem" => Some(ItemRarity::Gem),
            "Normal" => Some(ItemRarity::Normal),
            "Magic" => Some(ItemRarity::Magic),
            "Rare" => Some(ItemRarity::Rare),
            "Unique" => Some(ItemRarity::Unique),
            _ => None,
        }
    }

    /// Rarities that can carry rolled affixes.
    pub fn has_modifiers(&self) -> bool {
        matches!(
            self,
            ItemRarity::Normal | ItemRarity::Magic | ItemRarity::Rare | ItemRarity::Unique
        )
    }

    /// Rarities that stack in inventory slots.
    pub fn is_stackable(&self) -> bool {
        matches!(self, ItemRarity::Currency | ItemRarity::DivinationCard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Map,
    Prophecy,
    #[serde(rename = "Itemised Monster")]
    ItemisedMonster,
    Helmet,
    #[serde(rename = "Body Armour")]
    BodyArmour,
    Gloves,
    Boots,
    Shield,
    Amulet,
    Belt,
    Ring,
    Flask,
    #[serde(rename = "Abyss Jewel")]
    AbyssJewel,
    Jewel,
    Quiver,
    Claw,
    Bow,
    Sceptre,
    Wand,
    #[serde(rename = "Fishing Rod")]
    FishingRod,
    Staff,
    Warstaff,
    Dagger,
    #[serde(rename = "Rune Dagger")]
    RuneDagger,
    #[serde(rename = "One-Handed Axe")]
    OneHandedAxe,
    #[serde(rename = "Two-Handed Axe")]
    TwoHandedAxe,
    #[serde(rename = "One-Handed Mace")]
    OneHandedMace,
    #[serde(rename = "Two-Handed Mace")]
    TwoHandedMace,
    #[serde(rename = "One-Handed Sword")]
    OneHandedSword,
    #[serde(rename = "Two-Handed Sword")]
    TwoHandedSword,
}

/// Conqueror influence, recognized from `<Influence> Item` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemInfluence {
    Crusader,
    Elder,
    Hunter,
    Redeemer,
    Shaper,
    Warlord,
}

impl ItemInfluence {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Crusader" => Some(ItemInfluence::Crusader),
            "Elder" => Some(ItemInfluence::Elder),
            "Hunter" => Some(ItemInfluence::Hunter),
            "Redeemer" => Some(ItemInfluence::Redeemer),
            "Shaper" => Some(ItemInfluence::Shaper),
            "Warlord" => Some(ItemInfluence::Warlord),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_from_tag() {
        assert_eq!(
            ItemRarity::from_tag("Divination Card"),
            Some(ItemRarity::DivinationCard)
        );
        assert_eq!(ItemRarity::from_tag("Unique"), Some(ItemRarity::Unique));
        assert_eq!(ItemRarity::from_tag("Foil"), None);
    }

    #[test]
    fn test_rarity_classes() {
        assert!(ItemRarity::Rare.has_modifiers());
        assert!(!ItemRarity::Gem.has_modifiers());
        assert!(ItemRarity::Currency.is_stackable());
        assert!(!ItemRarity::Rare.is_stackable());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ItemCategory::BodyArmour).unwrap();
        assert_eq!(json, "\"Body Armour\"");
        let back: ItemCategory = serde_json::from_str("\"Abyss Jewel\"").unwrap();
        assert_eq!(back, ItemCategory::AbyssJewel);
    }

    #[test]
    fn test_influence_from_name() {
        assert_eq!(ItemInfluence::from_name("Shaper"), Some(ItemInfluence::Shaper));
        assert_eq!(ItemInfluence::from_name("Synthesised"), None);
    }
}
