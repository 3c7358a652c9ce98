use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dairy,
    Produce,
    Meat,
    Bakery,
    Snacks,
    Beverages,
    Household,
    Frozen,
    Pantry,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dairy => "dairy",
            Category::Produce => "produce",
            Category::Meat => "meat",
            Category::Bakery => "bakery",
            Category::Snacks => "snacks",
            Category::Beverages => "beverages",
            Category::Household => "household",
            Category::Frozen => "frozen",
            Category::Pantry => "pantry",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
