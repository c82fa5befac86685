use log::debug;

use super::constants::NUMBER;
use crate::data::{Database, StatOption, StatTemplate};
use crate::models::{ItemModifier, ModifierType};

/// A matched stat line whose affix kind may still be unknown. The kind is
/// back-filled by the stat-type resolution pass, which turns the pending
/// value into a finished [`ItemModifier`].
#[derive(Debug, Clone)]
pub struct PendingModifier {
    pub stat: StatTemplate,
    pub mod_type: Option<ModifierType>,
    pub source: u8,
    pub values: Vec<f64>,
    pub option: Option<StatOption>,
}

impl PendingModifier {
    pub fn into_modifier(self, mod_type: ModifierType) -> ItemModifier {
        ItemModifier {
            stat: self.stat,
            mod_type,
            source: self.source,
            values: self.values,
            option: self.option,
            condition: None,
        }
    }
}

/// Resolve a stat string against the knowledge base. Numeric rolls are
/// replaced with `#` placeholders and collected; when that lookup misses,
/// the raw text is tried against the option substitutions. Unrecognized
/// text is not an error.
pub fn try_find_modifier(stat: &str, db: &Database) -> Option<PendingModifier> {
    let mut values = Vec::new();
    let normalized = NUMBER.replace_all(stat, |caps: &regex::Captures<'_>| {
        values.push(caps[0].parse::<f64>().unwrap_or(0.0));
        "#"
    });

    if let Some(template) = db.stats().find(normalized.as_ref()) {
        return Some(PendingModifier {
            stat: template.clone(),
            mod_type: None,
            source: 0,
            values,
            option: None,
        });
    }

    if let Some((template, option)) = db.stats().find_option(stat) {
        return Some(PendingModifier {
            stat: template.clone(),
            mod_type: None,
            source: 0,
            values: Vec::new(),
            option: Some(option.clone()),
        });
    }

    debug!("no stat template matches {:?}", stat);
    None
}
