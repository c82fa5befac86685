use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::stats::{StatOption, StatTemplate};

/// Affix kind of a rolled stat line. Tooltips only tag implicit and crafted
/// lines explicitly; the remaining kinds are inferred from section position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierType {
    Pseudo,
    Explicit,
    Implicit,
    Crafted,
    Enchant,
}

impl fmt::Display for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierType::Pseudo => write!(f, "pseudo"),
            ModifierType::Explicit => write!(f, "explicit"),
            ModifierType::Implicit => write!(f, "implicit"),
            ModifierType::Crafted => write!(f, "crafted"),
            ModifierType::Enchant => write!(f, "enchant"),
        }
    }
}

/// Inclusive numeric range, used both for parsed damage ranges and for the
/// roll bounds a search query wants to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollRange {
    pub min: f64,
    pub max: f64,
}

impl RollRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// One rolled stat line matched against the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemModifier {
    /// The knowledge-base template this line matched.
    pub stat: StatTemplate,
    #[serde(rename = "type")]
    pub mod_type: ModifierType,
    /// 1-based index among the modifier-bearing sections of the tooltip.
    pub source: u8,
    /// Numeric rolls extracted from the line, in order of appearance.
    pub values: Vec<f64>,
    /// Chosen option for option-valued stats (no numeric rolls then).
    pub option: Option<StatOption>,
    /// Roll bounds for query building; the parser leaves this unset.
    pub condition: Option<RollRange>,
}

impl ItemModifier {
    /// The roll collapsed to a single number: the value itself for single
    /// rolls, the midpoint for ranged ones.
    pub fn roll(&self) -> Option<f64> {
        match self.values.len() {
            0 => None,
            1 => Some(self.values[0]),
            n => Some(self.values.iter().sum::<f64>() / n as f64),
        }
    }

    /// Trade identifier for the resolved type. A missing entry here is a
    /// defect in the knowledge base, not a runtime condition.
    pub fn trade_id(&self) -> &str {
        match self.stat.trade_id(self.mod_type) {
            Some(id) => id,
            None => panic!(
                "no {} trade id for stat {:?}",
                self.mod_type, self.stat.text
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::StatType;

    fn life_mod(values: Vec<f64>) -> ItemModifier {
        ItemModifier {
            stat: StatTemplate {
                text: "+# to maximum Life".to_string(),
                types: vec![StatType {
                    mod_type: ModifierType::Explicit,
                    trade_id: Some("explicit.stat_3299347043".to_string()),
                }],
                options: Vec::new(),
            },
            mod_type: ModifierType::Explicit,
            source: 1,
            values,
            option: None,
            condition: None,
        }
    }

    #[test]
    fn test_roll_midpoint() {
        assert_eq!(life_mod(vec![42.0]).roll(), Some(42.0));
        assert_eq!(life_mod(vec![10.0, 20.0]).roll(), Some(15.0));
        assert_eq!(life_mod(Vec::new()).roll(), None);
    }

    #[test]
    fn test_trade_id_lookup() {
        assert_eq!(life_mod(vec![42.0]).trade_id(), "explicit.stat_3299347043");
    }

    #[test]
    #[should_panic]
    fn test_trade_id_missing_is_fatal() {
        let mut modifier = life_mod(vec![42.0]);
        modifier.mod_type = ModifierType::Enchant;
        modifier.trade_id();
    }

    #[test]
    fn test_modifier_type_display() {
        assert_eq!(ModifierType::Enchant.to_string(), "enchant");
    }
}
