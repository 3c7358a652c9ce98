use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;

use super::ListStore;
use crate::models::{NewItem, ShoppingItem};

/// Keeps the list in process memory, in insertion order.
#[derive(Default)]
pub struct MemoryListStore {
    items: Mutex<Vec<ShoppingItem>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Vec<ShoppingItem>>> {
        self.items
            .lock()
            .map_err(|_| anyhow!("shopping list lock poisoned"))
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn insert(&self, item: NewItem) -> anyhow::Result<ShoppingItem> {
        let now = Utc::now();
        let stored = ShoppingItem {
            id: uuid::Uuid::new_v4().to_string(),
            name: item.name.trim().to_string(),
            quantity: item.quantity,
            category: item.category,
            completed: false,
            added_by_voice: item.added_by_voice,
            voice_command: item.voice_command,
            price: item.price,
            brand: item.brand,
            notes: item.notes,
            created_at: now,
            updated_at: now,
        };

        self.lock()?.push(stored.clone());
        Ok(stored)
    }

    async fn remove_first_matching(&self, fragment: &str) -> anyhow::Result<Option<ShoppingItem>> {
        let needle = fragment.trim().to_lowercase();
        let mut items = self.lock()?;

        let position = items
            .iter()
            .position(|item| item.name.to_lowercase().contains(&needle));

        Ok(position.map(|i| items.remove(i)))
    }

    async fn toggle_completed(&self, id: &str) -> anyhow::Result<Option<ShoppingItem>> {
        let mut items = self.lock()?;
        Ok(items.iter_mut().find(|item| item.id == id).map(|item| {
            item.completed = !item.completed;
            item.updated_at = Utc::now();
            item.clone()
        }))
    }

    async fn delete(&self, id: &str) -> anyhow::Result<Option<ShoppingItem>> {
        let mut items = self.lock()?;
        let position = items.iter().position(|item| item.id == id);
        Ok(position.map(|i| items.remove(i)))
    }

    async fn recent(&self, limit: usize) -> anyhow::Result<Vec<ShoppingItem>> {
        let mut items = self.lock()?.clone();
        // reversed first so equal timestamps stay newest-first through the stable sort
        items.reverse();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        items.truncate(limit);
        Ok(items)
    }

    async fn all(&self) -> anyhow::Result<Vec<ShoppingItem>> {
        let mut items = self.lock()?.clone();
        items.reverse();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }
}
