use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::errors::AppError;
use crate::models::{CatalogProduct, Category, ProductSummary, SearchQuery, Substitute, Suggestions};

pub const SEARCH_LIMIT: usize = 25;
const RECOMMENDATION_LIMIT: usize = 8;
const SEASONAL_LIMIT: usize = 6;
const SUBSTITUTE_LIMIT: usize = 3;

static BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Read-only product list, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<CatalogProduct>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }

    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let products: Vec<CatalogProduct> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(AppError::Catalog(format!("duplicate product id {}", product.id)));
            }
            if product.price.is_some_and(|p| p < 0.0) {
                return Err(AppError::Catalog(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
        }

        Ok(Self::new(products))
    }

    /// Load from `path` when given, otherwise the catalog compiled into the binary.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let json = fs::read_to_string(Path::new(path))?;
                let catalog = Self::from_json(&json)?;
                tracing::info!(path, products = catalog.len(), "loaded catalog file");
                Ok(catalog)
            }
            None => Self::builtin(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All filters must hold. Results keep catalog order, capped at
    /// [`SEARCH_LIMIT`].
    pub fn search(&self, query: &SearchQuery) -> Vec<&CatalogProduct> {
        let q = query.query.trim().to_lowercase();
        let brand = query
            .brand
            .as_deref()
            .map(|b| b.trim().to_lowercase())
            .filter(|b| !b.is_empty());

        self.products
            .iter()
            .filter(|p| p.is_available())
            .filter(|p| {
                q.is_empty()
                    || p.name.to_lowercase().contains(&q)
                    || p.category.as_str().contains(&q)
            })
            .filter(|p| match &brand {
                Some(b) => p
                    .brand
                    .as_deref()
                    .is_some_and(|pb| pb.to_lowercase().contains(b.as_str())),
                None => true,
            })
            .filter(|p| match query.min_price {
                Some(min) => p.price.is_some_and(|price| price >= min),
                None => true,
            })
            .filter(|p| match query.max_price {
                Some(max) => p.price.is_some_and(|price| price <= max),
                None => true,
            })
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Recommendations skip anything already on the list; substitutes are
    /// offered for milk and bread when those are on it.
    pub fn suggest<'a, I>(&self, recent_names: I) -> Suggestions
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: HashSet<String> = recent_names
            .into_iter()
            .map(|n| n.trim().to_lowercase())
            .collect();

        let available = || self.products.iter().filter(|p| p.is_available());

        let recommendations = available()
            .filter(|p| !names.contains(&p.name.to_lowercase()))
            .take(RECOMMENDATION_LIMIT)
            .map(ProductSummary::from)
            .collect();

        let seasonal = available()
            .filter(|p| p.category == Category::Produce)
            .take(SEASONAL_LIMIT)
            .map(ProductSummary::from)
            .collect();

        let mut substitutes = Vec::new();
        if names.contains("milk") {
            substitutes.push(self.substitute("milk", &["almond milk"]));
        }
        if names.contains("bread") {
            substitutes.push(self.substitute("bread", &["bread", "bagel", "roll"]));
        }

        Suggestions {
            recommendations,
            seasonal,
            substitutes,
        }
    }

    fn substitute(&self, for_item: &str, patterns: &[&str]) -> Substitute {
        let alternatives = self
            .products
            .iter()
            .filter(|p| p.is_available())
            .filter(|p| {
                let name = p.name.to_lowercase();
                patterns.iter().any(|pat| name.contains(pat))
            })
            .take(SUBSTITUTE_LIMIT)
            .map(ProductSummary::from)
            .collect();

        Substitute {
            for_item: for_item.to_string(),
            alternatives,
        }
    }
}
