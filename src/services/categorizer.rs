use std::sync::LazyLock;

use crate::models::Category;

const DAIRY: &[&str] = &[
    "milk",
    "cheese",
    "yogurt",
    "butter",
    "cream",
    "dairy",
    "sour cream",
    "cottage cheese",
    "mozzarella",
    "cheddar",
];

const PRODUCE: &[&str] = &[
    "apple", "banana", "orange", "lettuce", "tomato", "carrot", "onion", "potato", "broccoli",
    "spinach", "cucumber", "pepper", "avocado", "lemon", "lime", "grape", "strawberry",
    "blueberry", "organic",
];

const MEAT: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "turkey",
    "salmon",
    "tuna",
    "ham",
    "bacon",
    "sausage",
    "ground beef",
    "steak",
];

const BAKERY: &[&str] = &[
    "bread", "roll", "bagel", "muffin", "cake", "croissant", "donut", "cookie", "pastry",
    "tortilla", "pita",
];

const SNACKS: &[&str] = &[
    "chips",
    "crackers",
    "nuts",
    "cookies",
    "candy",
    "popcorn",
    "pretzel",
    "granola",
    "trail mix",
    "chocolate",
];

const BEVERAGES: &[&str] = &[
    "water",
    "juice",
    "soda",
    "coffee",
    "tea",
    "beer",
    "wine",
    "smoothie",
    "energy drink",
    "sports drink",
];

const HOUSEHOLD: &[&str] = &[
    "toilet paper",
    "soap",
    "shampoo",
    "detergent",
    "tissue",
    "paper towel",
    "cleaning",
    "laundry",
    "dish soap",
    "toothpaste",
    "deodorant",
];

const FROZEN: &[&str] = &[
    "frozen",
    "ice cream",
    "frozen dinner",
    "frozen pizza",
    "frozen vegetables",
];

const PANTRY: &[&str] = &[
    "rice", "pasta", "cereal", "oats", "flour", "sugar", "salt", "pepper", "oil", "vinegar",
    "sauce", "soup", "canned",
];

static DEFAULT_TABLE: LazyLock<CategoryTable> = LazyLock::new(CategoryTable::default);

/// Keyword table consulted in declaration order; the first category with a
/// keyword contained in the item name wins.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new([
            (Category::Dairy, DAIRY),
            (Category::Produce, PRODUCE),
            (Category::Meat, MEAT),
            (Category::Bakery, BAKERY),
            (Category::Snacks, SNACKS),
            (Category::Beverages, BEVERAGES),
            (Category::Household, HOUSEHOLD),
            (Category::Frozen, FROZEN),
            (Category::Pantry, PANTRY),
        ])
    }
}

impl CategoryTable {
    pub fn new<'a>(entries: impl IntoIterator<Item = (Category, &'a [&'a str])>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(category, keywords)| {
                let keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
                (category, keywords)
            })
            .collect();
        Self { entries }
    }

    pub fn categorize(&self, item_name: &str) -> Category {
        let name = item_name.to_lowercase();
        self.entries
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| name.contains(k.as_str())))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

/// Categorize against the built-in keyword table.
pub fn categorize(item_name: &str) -> Category {
    DEFAULT_TABLE.categorize(item_name)
}
