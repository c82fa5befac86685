pub mod item;
pub mod item_type;
pub mod modifier;

pub use item::{ItemProperties, ItemSockets, ParsedItem};

pub use item_type::{ItemCategory, ItemInfluence, ItemRarity};

pub use modifier::{ItemModifier, ModifierType, RollRange};
