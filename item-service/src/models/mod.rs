pub mod item;
pub mod lax;

pub use item::{seed_items, Item};
