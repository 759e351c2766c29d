//! In-memory item collection.
//!
//! # Design
//! `ItemStore` owns a `Vec<Item>` behind a `tokio::sync::RwLock` and is cheap
//! to clone (it is an `Arc` underneath), so one instance is built at startup
//! and handed to every handler through router state. Reads share the lock;
//! create, update and delete take the write lock, which makes each
//! lookup-then-modify step atomic. A `Vec` keeps insertion order for `list`.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{CreateItem, Item, UpdateItem};

/// Errors returned by `ItemStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No live item has the requested id.
    #[error("Item not found")]
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item with a freshly generated id.
    pub async fn create(&self, input: CreateItem) -> Item {
        let item = Item {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            description: input.description,
        };
        self.items.write().await.push(item.clone());
        tracing::info!(id = %item.id, "item created");
        item
    }

    /// Snapshot of every live item, oldest first.
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Item, StoreError> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Overwrite the supplied fields of an existing item. Fields left as
    /// `None` keep their current value; `Some(None)` clears the description.
    pub async fn update(&self, id: &str, input: UpdateItem) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(name) = input.name {
            item.name = name;
        }
        if let Some(description) = input.description {
            item.description = description;
        }
        tracing::info!(id = %item.id, "item updated");
        Ok(item.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let idx = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound)?;
        items.remove(idx);
        tracing::info!(id = %id, "item deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
