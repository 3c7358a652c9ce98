use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub completed: bool,
    pub added_by_voice: bool,
    pub voice_command: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An item as handed to the list store, before it has an id or timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub added_by_voice: bool,
    pub voice_command: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
    pub notes: Option<String>,
}

impl NewItem {
    pub fn from_voice(name: &str, quantity: u32, category: Category, command: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            quantity,
            category,
            added_by_voice: true,
            voice_command: Some(command.trim().to_string()).filter(|c| !c.is_empty()),
            price: None,
            brand: None,
            notes: None,
        }
    }
}
