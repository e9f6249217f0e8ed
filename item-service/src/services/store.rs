use crate::models::{seed_items, Item};
use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Item not found")]
    NotFound(i64),

    #[error("Item with this ID already exists")]
    DuplicateId(i64),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(anyhow::anyhow!(err)),
            StoreError::DuplicateId(_) => AppError::BadRequest(anyhow::anyhow!(err)),
        }
    }
}

/// Ordered, append-only collection of items.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in insertion order.
    async fn list(&self) -> Vec<Item>;

    /// First item whose id matches.
    async fn get(&self, id: i64) -> Result<Item, StoreError>;

    /// Append `item` unless its id is already taken.
    async fn insert(&self, item: Item) -> Result<Item, StoreError>;

    async fn len(&self) -> usize;
}

/// Process-memory store. The id check and the append share one write lock,
/// so concurrent inserts of the same id admit exactly one.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_items())
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    async fn get(&self, id: i64) -> Result<Item, StoreError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, item: Item) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        items.push(item.clone());
        Ok(item)
    }

    async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}
