//! Turns the clipboard text of an item tooltip into a [`ParsedItem`].
//!
//! The tooltip format is positional: sections are separated by literal
//! `--------` lines and nothing inside a section says what it is. The
//! pipeline therefore runs a fixed list of stages over the section pool,
//! each claiming at most one section, and infers affix kinds from which
//! sections turned out to be present.

mod constants;
mod magic_name;
mod modifiers;
mod sections;
mod stat_strings;

use log::debug;

use crate::data::Database;
use crate::models::{
    ItemCategory, ItemInfluence, ItemRarity, ModifierType, ParsedItem, RollRange,
};
use constants::*;
use magic_name::magic_base_type;
use modifiers::{try_find_modifier, PendingModifier};
use sections::{tokenize, Section};
use stat_strings::StatStrings;

/// The hotkey copies a Chaos Orb to signal "nothing new on the clipboard";
/// it is never a real price check.
const NO_OP_ITEM_NAME: &str = "Chaos Orb";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionParse {
    Consumed,
    NoMatch,
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Unidentified,
    Synthesised,
    NormalizeName,
    ItemLevel,
    VaalGem,
    Gem,
    Armour,
    Weapon,
    Flask,
    StackSize,
    Corrupted,
    Influences,
    Map,
    Sockets,
    Modifiers(u8),
    ResolveStatTypes,
}

/// Stage order encodes parsing precedence: identity fixups run before
/// name classification, and every plain property stage runs before the
/// modifier stages so a property section is never read as an affix
/// section.
const STAGES: [Stage; 18] = [
    Stage::Unidentified,
    Stage::Synthesised,
    Stage::NormalizeName,
    Stage::ItemLevel,
    Stage::VaalGem,
    Stage::Gem,
    Stage::Armour,
    Stage::Weapon,
    Stage::Flask,
    Stage::StackSize,
    Stage::Corrupted,
    Stage::Influences,
    Stage::Map,
    Stage::Sockets,
    Stage::Modifiers(1),
    Stage::Modifiers(2),
    Stage::Modifiers(3),
    Stage::ResolveStatTypes,
];

/// Parse the clipboard contents of a copied item. Returns `None` when the
/// text does not describe a recognizable item; partial results are never
/// produced.
pub fn parse_clipboard(clipboard: &str, db: &Database) -> Option<ParsedItem> {
    let mut sections = tokenize(clipboard);
    if sections.is_empty() {
        return None;
    }

    let mut parser = ItemParser::from_name_plate(&sections[0], db)?;
    sections.remove(0);

    for stage in STAGES {
        parser.run(stage, &mut sections);
    }
    for section in &sections {
        debug!("dropping unrecognized section starting {:?}", section.first());
    }

    Some(parser.finish(clipboard))
}

/// Working state of one parse: the item being built plus the matched stat
/// lines whose affix kind is still open.
struct ItemParser<'db> {
    db: &'db Database,
    item: ParsedItem,
    pending: Vec<PendingModifier>,
}

impl<'db> ItemParser<'db> {
    /// Consume the name-plate section, the only one with a fixed position.
    fn from_name_plate(section: &Section, db: &'db Database) -> Option<Self> {
        let tag = section.first()?.strip_prefix(TAG_RARITY)?;
        let rarity = ItemRarity::from_tag(tag)?;

        let name = strip_markup(section.get(1)?);
        if name == NO_OP_ITEM_NAME {
            return None;
        }
        let base_type = section.get(2).map(|line| strip_markup(line));

        Some(Self {
            db,
            item: ParsedItem::new(rarity, name, base_type),
            pending: Vec::new(),
        })
    }

    fn run(&mut self, stage: Stage, sections: &mut Vec<Section>) {
        match stage {
            Stage::NormalizeName => return self.normalize_name(),
            Stage::ResolveStatTypes => return self.resolve_stat_types(),
            _ => {}
        }
        if !self.applicable(stage) {
            return;
        }
        for idx in 0..sections.len() {
            if self.apply(stage, &sections[idx]) == SectionParse::Consumed {
                sections.remove(idx);
                return;
            }
        }
    }

    fn applicable(&self, stage: Stage) -> bool {
        match stage {
            Stage::VaalGem | Stage::Gem => self.item.rarity == ItemRarity::Gem,
            Stage::StackSize => self.item.rarity.is_stackable(),
            Stage::Modifiers(_) => self.item.rarity.has_modifiers(),
            _ => true,
        }
    }

    fn apply(&mut self, stage: Stage, section: &Section) -> SectionParse {
        match stage {
            Stage::Unidentified => self.parse_unidentified(section),
            Stage::Synthesised => self.parse_synthesised(section),
            Stage::ItemLevel => self.parse_item_level(section),
            Stage::VaalGem => self.parse_vaal_gem(section),
            Stage::Gem => self.parse_gem(section),
            Stage::Armour => self.parse_armour(section),
            Stage::Weapon => self.parse_weapon(section),
            Stage::Flask => self.parse_flask(section),
            Stage::StackSize => self.parse_stack_size(section),
            Stage::Corrupted => self.parse_corrupted(section),
            Stage::Influences => self.parse_influences(section),
            Stage::Map => self.parse_map(section),
            Stage::Sockets => self.parse_sockets(section),
            Stage::Modifiers(source) => self.parse_modifiers(source, section),
            Stage::NormalizeName | Stage::ResolveStatTypes => {
                unreachable!("transform stages never claim sections")
            }
        }
    }

    fn finish(mut self, clipboard: &str) -> ParsedItem {
        self.item.raw_text = clipboard.to_string();
        self.item
    }

    fn parse_unidentified(&mut self, section: &Section) -> SectionParse {
        if section[0] != UNIDENTIFIED {
            return SectionParse::NoMatch;
        }
        self.item.is_unidentified = true;
        SectionParse::Consumed
    }

    fn parse_synthesised(&mut self, section: &Section) -> SectionParse {
        if section.len() != 1 || section[0] != SECTION_SYNTHESISED {
            return SectionParse::NoMatch;
        }
        if let Some(base_type) = &self.item.base_type {
            if let Some(stripped) = base_type.strip_prefix(PREFIX_SYNTHESISED) {
                self.item.base_type = Some(stripped.to_string());
            }
        } else if let Some(stripped) = self.item.name.strip_prefix(PREFIX_SYNTHESISED) {
            self.item.name = stripped.to_string();
        }
        SectionParse::Consumed
    }

    /// Strip cosmetic name prefixes, recover the base type of magic items
    /// and classify the item. Transform-only.
    fn normalize_name(&mut self) {
        if self.item.rarity.has_modifiers() {
            if let Some(stripped) = self.item.name.strip_prefix(PREFIX_SUPERIOR) {
                self.item.name = stripped.to_string();
            }
        }

        if self.item.rarity == ItemRarity::Magic {
            if let Some(base) = magic_base_type(&self.item.name, self.db) {
                self.item.name = base;
            }
        }

        if self.db.is_prophecy(&self.item.name) {
            self.item.category = Some(ItemCategory::Prophecy);
        } else if self.db.is_itemised_monster(&self.item.name)
            || self
                .item
                .base_type
                .as_deref()
                .map_or(false, |base| self.db.is_itemised_monster(base))
        {
            self.item.category = Some(ItemCategory::ItemisedMonster);
        } else if let Some(entry) = self.db.base_type(self.item.base_or_name()) {
            self.item.category = Some(entry.category);
            self.item.icon = entry.icon.clone();
        }
    }

    fn parse_item_level(&mut self, section: &Section) -> SectionParse {
        let Some(value) = section[0].strip_prefix(TAG_ITEM_LEVEL) else {
            return SectionParse::NoMatch;
        };
        self.item.item_level = leading_u32(value);
        SectionParse::Consumed
    }

    fn parse_vaal_gem(&mut self, section: &Section) -> SectionParse {
        if section.len() != 1 || section[0] != format!("{}{}", PREFIX_VAAL, self.item.name) {
            return SectionParse::NoMatch;
        }
        self.item.name = section[0].clone();
        SectionParse::Consumed
    }

    fn parse_gem(&mut self, section: &Section) -> SectionParse {
        // "Level: 20 (Max)" on the second line, after the gem tags
        let Some(value) = section.get(1).and_then(|l| l.strip_prefix(TAG_GEM_LEVEL)) else {
            return SectionParse::NoMatch;
        };
        self.item.props.gem_level = leading_u32(value);
        self.parse_quality_nested(section);
        SectionParse::Consumed
    }

    fn parse_quality_nested(&mut self, section: &Section) {
        for line in section {
            if let Some(value) = line.strip_prefix(TAG_QUALITY) {
                // "Quality: +20% (augmented)"
                self.item.quality = leading_u32(value);
                break;
            }
        }
    }

    fn parse_armour(&mut self, section: &Section) -> SectionParse {
        let mut parsed = SectionParse::NoMatch;

        for line in section {
            if let Some(value) = line.strip_prefix(TAG_ARMOUR) {
                self.item.props.armour = leading_u32(value);
                parsed = SectionParse::Consumed;
            } else if let Some(value) = line.strip_prefix(TAG_EVASION) {
                self.item.props.evasion = leading_u32(value);
                parsed = SectionParse::Consumed;
            } else if let Some(value) = line.strip_prefix(TAG_ENERGY_SHIELD) {
                self.item.props.energy_shield = leading_u32(value);
                parsed = SectionParse::Consumed;
            } else if let Some(value) = line.strip_prefix(TAG_BLOCK_CHANCE) {
                self.item.props.block_chance = leading_u32(value);
                parsed = SectionParse::Consumed;
            }
        }

        if parsed == SectionParse::Consumed {
            self.parse_quality_nested(section);
        }
        parsed
    }

    fn parse_weapon(&mut self, section: &Section) -> SectionParse {
        let mut parsed = SectionParse::NoMatch;

        for line in section {
            if let Some(value) = line.strip_prefix(TAG_CRIT_CHANCE) {
                self.item.props.crit_chance = leading_f64(value);
                parsed = SectionParse::Consumed;
            } else if let Some(value) = line.strip_prefix(TAG_ATTACK_SPEED) {
                self.item.props.attack_speed = leading_f64(value);
                parsed = SectionParse::Consumed;
            } else if let Some(value) = line.strip_prefix(TAG_PHYSICAL_DAMAGE) {
                self.item.props.physical_damage = parse_damage_range(value);
                parsed = SectionParse::Consumed;
            } else if let Some(value) = line.strip_prefix(TAG_ELEMENTAL_DAMAGE) {
                let total: f64 = value
                    .split(", ")
                    .filter_map(parse_damage_range)
                    .map(|range| range.midpoint())
                    .sum();
                self.item.props.elemental_damage = Some(total);
                parsed = SectionParse::Consumed;
            }
        }

        if parsed == SectionParse::Consumed {
            self.parse_quality_nested(section);
        }
        parsed
    }

    /// Consumes the flask buff section so charge and effect lines are
    /// never mistaken for affixes.
    fn parse_flask(&mut self, section: &Section) -> SectionParse {
        for line in section {
            if FLASK_CHARGES.is_match(line) {
                return SectionParse::Consumed;
            }
        }
        SectionParse::NoMatch
    }

    fn parse_stack_size(&mut self, section: &Section) -> SectionParse {
        let Some(value) = section[0].strip_prefix(TAG_STACK_SIZE) else {
            return SectionParse::NoMatch;
        };
        // "Stack Size: 2/10"
        self.item.stack_size = leading_u32(value);
        SectionParse::Consumed
    }

    fn parse_corrupted(&mut self, section: &Section) -> SectionParse {
        if section[0] != CORRUPTED {
            return SectionParse::NoMatch;
        }
        self.item.is_corrupted = true;
        SectionParse::Consumed
    }

    fn parse_influences(&mut self, section: &Section) -> SectionParse {
        if !section[0].ends_with(SUFFIX_INFLUENCE) {
            return SectionParse::NoMatch;
        }
        let before = self.item.influences.len();
        for line in section {
            if let Some(name) = line.strip_suffix(SUFFIX_INFLUENCE) {
                if let Some(influence) = ItemInfluence::from_name(name) {
                    self.item.influences.push(influence);
                }
            }
        }
        if self.item.influences.len() > before {
            SectionParse::Consumed
        } else {
            SectionParse::NoMatch
        }
    }

    fn parse_map(&mut self, section: &Section) -> SectionParse {
        let Some(value) = section[0].strip_prefix(TAG_MAP_TIER) else {
            return SectionParse::NoMatch;
        };
        self.item.props.map_tier = leading_u32(value);

        if self.item.rarity == ItemRarity::Normal {
            if let Some(stripped) = self.item.name.strip_prefix(PREFIX_BLIGHTED) {
                self.item.name = stripped.to_string();
                self.item.category = Some(ItemCategory::Map);
                self.item.props.map_blighted = true;
            }
        }
        SectionParse::Consumed
    }

    fn parse_sockets(&mut self, section: &Section) -> SectionParse {
        let Some(sockets) = section[0].strip_prefix(TAG_SOCKETS) else {
            return SectionParse::NoMatch;
        };

        self.item.sockets.white = sockets.matches('W').count() as u32;

        let masked: String = sockets
            .chars()
            .map(|c| if c == ' ' || c == '-' { c } else { '#' })
            .collect();
        self.item.sockets.linked = match masked.as_str() {
            "#-#-#-#-#-#" => Some(6),
            "# #-#-#-#-#" | "#-#-#-#-# #" | "#-#-#-#-#" => Some(5),
            _ => None,
        };
        SectionParse::Consumed
    }

    /// Run the stat-string cursor over the section, matching each
    /// candidate against the knowledge base. `source` is the 1-based
    /// index among the modifier-bearing sections.
    fn parse_modifiers(&mut self, source: u8, section: &Section) -> SectionParse {
        let before = self.pending.len();

        let mut stats = StatStrings::new(section);
        while let Some(candidate) = stats.peek() {
            let mut mod_type = candidate.tentative;

            let accepted = match try_find_modifier(&candidate.text, self.db) {
                Some(mut found) => {
                    if mod_type.is_none() {
                        // no marker: positionally explicit or enchant; take
                        // the template's only fitting kind when unambiguous
                        let possible = found.stat.unmarked_types();
                        if possible.len() == 1 {
                            mod_type = Some(possible[0]);
                        }
                    }

                    if mod_type.map_or(true, |t| found.stat.supports(t)) {
                        found.mod_type = mod_type;
                        found.source = source;
                        self.pending.push(found);
                        true
                    } else {
                        false
                    }
                }
                None => false,
            };
            stats.advance(accepted);
        }

        if self.pending.len() > before {
            SectionParse::Consumed
        } else {
            SectionParse::NoMatch
        }
    }

    /// Assign a kind to every still-untyped modifier. Which of the up to
    /// three modifier sections holds enchants, implicits or explicits
    /// depends on which of them are present at all, so this can only run
    /// after all three extraction stages.
    fn resolve_stat_types(&mut self) {
        let mods = &self.pending;

        let has_implicit = mods
            .iter()
            .any(|m| m.mod_type == Some(ModifierType::Implicit));
        let mut has_explicit = mods.iter().any(|m| {
            m.mod_type == Some(ModifierType::Explicit)
                || m.mod_type == Some(ModifierType::Crafted)
                || m.source == 3
                || (m.mod_type.is_none() && m.source == 2)
        });
        let mut has_enchant = mods.iter().any(|m| {
            m.mod_type == Some(ModifierType::Enchant)
                || (has_implicit && m.mod_type.is_none() && m.source == 1)
        });

        if !has_implicit {
            if mods.iter().any(|m| m.mod_type.is_none() && m.source == 1)
                && mods.iter().any(|m| m.mod_type.is_none() && m.source == 2)
            {
                // two affix sections without an implicit: enchant + explicit
                has_enchant = true;
                has_explicit = true;
            }

            if !has_enchant && !has_explicit {
                has_explicit = true;
            }
        }

        for pending in self.pending.drain(..) {
            let mod_type = match pending.mod_type {
                Some(t) => t,
                None if pending.source == 1 && has_enchant => ModifierType::Enchant,
                None => ModifierType::Explicit,
            };
            self.item.modifiers.push(pending.into_modifier(mod_type));
        }
    }
}

fn strip_markup(line: &str) -> String {
    MARKUP.replace(line, "").into_owned()
}

fn parse_damage_range(text: &str) -> Option<RollRange> {
    let mut parts = text.split('-');
    let min = leading_u32(parts.next()?.trim())? as f64;
    let max = leading_u32(parts.next()?.trim())? as f64;
    Some(RollRange { min, max })
}
