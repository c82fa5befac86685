pub mod database;
pub mod stats;

pub use database::{BaseTypeEntry, Database};

pub use stats::{StatDatabase, StatOption, StatTemplate, StatType};
