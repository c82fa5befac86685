use once_cell::sync::Lazy;
use regex::Regex;

pub const SEPARATOR: &str = "--------";

pub const TAG_RARITY: &str = "Rarity: ";
pub const TAG_ITEM_LEVEL: &str = "Item Level: ";
pub const TAG_GEM_LEVEL: &str = "Level: ";
pub const TAG_STACK_SIZE: &str = "Stack Size: ";
pub const TAG_MAP_TIER: &str = "Map Tier: ";
pub const TAG_SOCKETS: &str = "Sockets: ";
pub const TAG_QUALITY: &str = "Quality: +";
pub const TAG_ARMOUR: &str = "Armour: ";
pub const TAG_EVASION: &str = "Evasion Rating: ";
pub const TAG_ENERGY_SHIELD: &str = "Energy Shield: ";
pub const TAG_BLOCK_CHANCE: &str = "Chance to Block: ";
pub const TAG_CRIT_CHANCE: &str = "Critical Strike Chance: ";
pub const TAG_ATTACK_SPEED: &str = "Attacks per Second: ";
pub const TAG_PHYSICAL_DAMAGE: &str = "Physical Damage: ";
pub const TAG_ELEMENTAL_DAMAGE: &str = "Elemental Damage: ";

pub const CORRUPTED: &str = "Corrupted";
pub const UNIDENTIFIED: &str = "Unidentified";
pub const SECTION_SYNTHESISED: &str = "Synthesised Item";

pub const PREFIX_VAAL: &str = "Vaal ";
pub const PREFIX_SUPERIOR: &str = "Superior ";
pub const PREFIX_BLIGHTED: &str = "Blighted ";
pub const PREFIX_SYNTHESISED: &str = "Synthesised ";

pub const SUFFIX_INFLUENCE: &str = " Item";
pub const SUFFIX_IMPLICIT: &str = " (implicit)";
pub const SUFFIX_CRAFTED: &str = " (crafted)";

/// Chat color/formatting wrappers prepended to names copied from chat,
/// e.g. `<<set:MS>><<set:M>><<set:S>>Beast Grinder`.
pub static MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(<<.*?>>|<.*?>)+").unwrap());

pub static FLASK_CHARGES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Currently has \d+ Charges$").unwrap());

/// A numeric roll inside a stat line.
pub static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Parse the integer a tooltip value line starts with, ignoring trailers
/// like ` (augmented)`, `/9` or `%`.
pub fn leading_u32(value: &str) -> Option<u32> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Float variant of [`leading_u32`], for `6.50%`-style values.
pub fn leading_f64(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_numbers() {
        assert_eq!(leading_u32("20 (Max)"), Some(20));
        assert_eq!(leading_u32("2/9"), Some(2));
        assert_eq!(leading_u32("(Max)"), None);
        assert_eq!(leading_f64("6.50% (augmented)"), Some(6.5));
        assert_eq!(leading_f64("1.55"), Some(1.55));
    }

    #[test]
    fn test_markup_pattern() {
        assert_eq!(
            MARKUP.replace("<<set:MS>><<set:M>><<set:S>>Beast Grinder", ""),
            "Beast Grinder"
        );
        assert_eq!(MARKUP.replace("Beast Grinder", ""), "Beast Grinder");
    }

    #[test]
    fn test_flask_charges_pattern() {
        assert!(FLASK_CHARGES.is_match("Currently has 32 Charges"));
        assert!(!FLASK_CHARGES.is_match("Currently has no Charges"));
    }
}
