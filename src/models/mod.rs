pub mod catalog;
pub mod category;
pub mod intent;
pub mod item;

pub use catalog::{CatalogProduct, ProductSummary, Substitute, Suggestions};
pub use category::Category;
pub use intent::{Intent, SearchQuery};
pub use item::{NewItem, ShoppingItem};
