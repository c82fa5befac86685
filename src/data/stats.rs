use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::ModifierType;

/// One affix kind a stat template is valid as, with the identifier the
/// trade site expects for that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatType {
    #[serde(rename = "type")]
    pub mod_type: ModifierType,
    #[serde(rename = "tradeId", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
}

/// A choice for option-valued stats ("Allocates <passive>" and friends).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatOption {
    pub text: String,
    #[serde(rename = "tradeId", default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
}

/// A stat line template from the knowledge base. `text` uses `#` in place
/// of numeric rolls; a `\n` inside `text` marks a stat whose tooltip
/// rendering spans two lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatTemplate {
    pub text: String,
    pub types: Vec<StatType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<StatOption>,
}

impl StatTemplate {
    pub fn supports(&self, mod_type: ModifierType) -> bool {
        self.types.iter().any(|t| t.mod_type == mod_type)
    }

    pub fn trade_id(&self, mod_type: ModifierType) -> Option<&str> {
        self.types
            .iter()
            .find(|t| t.mod_type == mod_type)
            .and_then(|t| t.trade_id.as_deref())
    }

    /// Types an unmarked stat line could resolve to. Implicit and crafted
    /// lines always carry a suffix marker, and pseudo stats never appear
    /// on a tooltip, so those kinds are excluded here.
    pub fn unmarked_types(&self) -> Vec<ModifierType> {
        self.types
            .iter()
            .map(|t| t.mod_type)
            .filter(|t| {
                !matches!(
                    t,
                    ModifierType::Pseudo | ModifierType::Implicit | ModifierType::Crafted
                )
            })
            .collect()
    }
}

/// Lookup tables over the stat templates, built once at load time.
#[derive(Debug, Default)]
pub struct StatDatabase {
    by_text: HashMap<String, StatTemplate>,
    by_option_text: HashMap<String, (StatTemplate, StatOption)>,
}

impl StatDatabase {
    pub fn from_templates(templates: Vec<StatTemplate>) -> Self {
        let mut by_text = HashMap::new();
        let mut by_option_text = HashMap::new();

        for template in templates {
            for option in &template.options {
                let substituted = template.text.replacen('#', &option.text, 1);
                by_option_text.insert(substituted, (template.clone(), option.clone()));
            }
            by_text.insert(template.text.clone(), template);
        }

        Self {
            by_text,
            by_option_text,
        }
    }

    /// Look up a stat string whose numeric rolls were replaced with `#`.
    pub fn find(&self, normalized: &str) -> Option<&StatTemplate> {
        self.by_text.get(normalized)
    }

    /// Look up the raw stat string against the option substitutions.
    pub fn find_option(&self, raw: &str) -> Option<&(StatTemplate, StatOption)> {
        self.by_option_text.get(raw)
    }

    pub fn len(&self) -> usize {
        self.by_text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_templates() -> Vec<StatTemplate> {
        vec![
            StatTemplate {
                text: "#% increased Attack Speed".to_string(),
                types: vec![
                    StatType {
                        mod_type: ModifierType::Explicit,
                        trade_id: Some("explicit.stat_210067635".to_string()),
                    },
                    StatType {
                        mod_type: ModifierType::Enchant,
                        trade_id: Some("enchant.stat_210067635".to_string()),
                    },
                    StatType {
                        mod_type: ModifierType::Crafted,
                        trade_id: Some("crafted.stat_210067635".to_string()),
                    },
                ],
                options: Vec::new(),
            },
            StatTemplate {
                text: "Allocates #".to_string(),
                types: vec![StatType {
                    mod_type: ModifierType::Enchant,
                    trade_id: Some("enchant.stat_2954116742".to_string()),
                }],
                options: vec![StatOption {
                    text: "Tenacity".to_string(),
                    trade_id: Some("55373".to_string()),
                }],
            },
        ]
    }

    #[test]
    fn test_find_by_placeholder_text() {
        let db = StatDatabase::from_templates(sample_templates());
        let template = db.find("#% increased Attack Speed").unwrap();
        assert!(template.supports(ModifierType::Enchant));
        assert!(db.find("#% increased Unknown Nonsense").is_none());
    }

    #[test]
    fn test_unmarked_types_exclude_marked_kinds() {
        let db = StatDatabase::from_templates(sample_templates());
        let template = db.find("#% increased Attack Speed").unwrap();
        let unmarked = template.unmarked_types();
        assert_eq!(
            unmarked,
            vec![ModifierType::Explicit, ModifierType::Enchant]
        );
    }

    #[test]
    fn test_find_option_by_substituted_text() {
        let db = StatDatabase::from_templates(sample_templates());
        let (template, option) = db.find_option("Allocates Tenacity").unwrap();
        assert_eq!(template.text, "Allocates #");
        assert_eq!(option.text, "Tenacity");
        assert!(db.find_option("Allocates Nothing").is_none());
    }

    #[test]
    fn test_trade_id_per_type() {
        let db = StatDatabase::from_templates(sample_templates());
        let template = db.find("#% increased Attack Speed").unwrap();
        assert_eq!(
            template.trade_id(ModifierType::Crafted),
            Some("crafted.stat_210067635")
        );
        assert_eq!(template.trade_id(ModifierType::Implicit), None);
    }
}
