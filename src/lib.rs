//! Parser for item tooltips copied out of the game client.
//!
//! The clipboard text produced by Ctrl+C over an item is a versioned,
//! positional format: sections separated by `--------` lines, with affix
//! kinds encoded by section order rather than tags. [`parse_clipboard`]
//! turns that text into an immutable [`ParsedItem`] with every rolled
//! affix matched against a shared, read-only [`Database`] and classified,
//! ready for price lookups and trade-query building.
//!
//! ```no_run
//! use poe_item_parser::{parse_clipboard, Database};
//!
//! let clipboard = "Rarity: Currency\nDivine Orb\n--------\nStack Size: 2/10\n";
//! let item = parse_clipboard(clipboard, Database::shared());
//! assert!(item.is_some());
//! ```

pub mod data;
pub mod errors;
pub mod models;
pub mod parser;

pub use data::Database;

pub use errors::{ParserError, Result};

pub use models::{
    ItemCategory, ItemInfluence, ItemModifier, ItemProperties, ItemRarity, ItemSockets,
    ModifierType, ParsedItem, RollRange,
};

pub use parser::parse_clipboard;
