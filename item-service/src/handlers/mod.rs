pub mod health;
pub mod items;
pub mod metrics;
pub mod root;

pub use health::health_check;
pub use items::{create_item, get_item, list_items};
pub use root::read_root;
