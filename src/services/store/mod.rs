pub mod memory;

use async_trait::async_trait;

use crate::models::{NewItem, ShoppingItem};

/// The shopping list collection. Ids and timestamps are the store's business.
#[async_trait]
pub trait ListStore: Send + Sync {
    async fn insert(&self, item: NewItem) -> anyhow::Result<ShoppingItem>;

    /// Delete the first item whose name contains `fragment`, ignoring case.
    async fn remove_first_matching(&self, fragment: &str) -> anyhow::Result<Option<ShoppingItem>>;

    /// Flip `completed` and bump `updated_at`. `None` when no item has `id`.
    async fn toggle_completed(&self, id: &str) -> anyhow::Result<Option<ShoppingItem>>;

    async fn delete(&self, id: &str) -> anyhow::Result<Option<ShoppingItem>>;

    /// Most recently updated first.
    async fn recent(&self, limit: usize) -> anyhow::Result<Vec<ShoppingItem>>;

    /// Newest first.
    async fn all(&self) -> anyhow::Result<Vec<ShoppingItem>>;
}
