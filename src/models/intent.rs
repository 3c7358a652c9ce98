use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchQuery {
    pub query: String,
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    Add {
        name: String,
        quantity: u32,
        category: Category,
    },
    Remove {
        name: String,
    },
    Search(SearchQuery),
    Unknown,
}

impl Intent {
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::Add { .. } => "add",
            Intent::Remove { .. } => "remove",
            Intent::Search(_) => "search",
            Intent::Unknown => "unknown",
        }
    }
}
