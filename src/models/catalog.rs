use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Missing means available; only an explicit `false` hides the product.
    #[serde(default)]
    pub available: Option<bool>,
}

impl CatalogProduct {
    pub fn is_available(&self) -> bool {
        self.available != Some(false)
    }
}

/// What a caller sees for each search hit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub category: Category,
    pub price: Option<f64>,
}

impl From<&CatalogProduct> for ProductSummary {
    fn from(p: &CatalogProduct) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            brand: p.brand.clone(),
            category: p.category,
            price: p.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Substitute {
    #[serde(rename = "for")]
    pub for_item: String,
    pub alternatives: Vec<ProductSummary>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Suggestions {
    pub recommendations: Vec<ProductSummary>,
    pub seasonal: Vec<ProductSummary>,
    pub substitutes: Vec<Substitute>,
}
