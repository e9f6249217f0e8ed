pub mod metrics;
pub mod store;

pub use self::metrics::{get_metrics, init_metrics};
pub use store::{InMemoryItemStore, ItemStore, StoreError};
