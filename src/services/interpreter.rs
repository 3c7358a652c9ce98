use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Intent, SearchQuery};
use crate::services::categorizer::CategoryTable;

const SEARCH_TRIGGERS: &[&str] = &["find", "search", "look for"];

const ADD_TRIGGERS: &[&str] = &[
    "add",
    "i need",
    "i want",
    "buy",
    "get",
    "pick up",
    "grab",
    "put",
    "include",
    "i should get",
    "i have to get",
    "i forgot to get",
];

const REMOVE_TRIGGERS: &[&str] = &[
    "remove",
    "delete",
    "take off",
    "cross off",
    "cross out",
    "don't need",
    "don't want",
    "cancel",
    "forget",
];

const STOP_WORDS: &[&str] = &[
    "add", "i", "need", "want", "to", "buy", "get", "remove", "delete", "from", "my", "list",
    "pick", "up", "grab", "put", "include", "should", "have", "forgot", "take", "off", "cross",
    "out", "don't", "cancel", "forget", "the", "a", "an", "some", "please", "um", "uh", "er",
    "ah",
];

static BRAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bby\s+([\p{L}\p{N}\-]+(?:[ ]+[\p{L}\p{N}\-]+)*?)[ ]*(?:\b(?:under|over)\b|[^\p{L}\p{N}\- ]|$)",
    )
    .unwrap()
});
static MAX_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"under\s*\$?\s*(\d+(?:\.\d+)?)").unwrap());
static MIN_PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"over\s*\$?\s*(\d+(?:\.\d+)?)").unwrap());
static SEARCH_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:find|search(?:\s+for)?|look\s+for|under|over|by)\b|\$").unwrap()
});
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static DEFAULT_INTERPRETER: LazyLock<Interpreter> = LazyLock::new(Interpreter::default);

/// Turns a raw utterance into an [`Intent`]. Never fails: anything it cannot
/// make sense of comes back as `Intent::Unknown`.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    categories: CategoryTable,
}

impl Interpreter {
    pub fn new(categories: CategoryTable) -> Self {
        Self { categories }
    }

    pub fn interpret(&self, raw: &str) -> Intent {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Intent::Unknown;
        }

        // Plain substring triggers, search first; "forget" holds "get" and so adds.
        if contains_any(&text, SEARCH_TRIGGERS) {
            return Intent::Search(parse_search(&text));
        }

        if contains_any(&text, ADD_TRIGGERS) {
            return self.add_intent(&text);
        }

        if contains_any(&text, REMOVE_TRIGGERS) {
            return Intent::Remove {
                name: extract_item_name(&text),
            };
        }

        if !extract_item_name(&text).is_empty() {
            tracing::debug!(text = %text, "no trigger phrase, assuming add");
            return self.add_intent(&text);
        }

        Intent::Unknown
    }

    fn add_intent(&self, text: &str) -> Intent {
        let name = extract_item_name(text);
        let category = self.categories.categorize(&name);
        Intent::Add {
            name,
            quantity: extract_quantity(text),
            category,
        }
    }
}

/// Interpret with the built-in keyword tables.
pub fn interpret(raw: &str) -> Intent {
    DEFAULT_INTERPRETER.interpret(raw)
}

/// Drops command verbs, articles, fillers and bare numbers, keeping what is
/// left as the item name. An empty result means nothing was recognized.
pub fn extract_item_name(text: &str) -> String {
    words(text)
        .into_iter()
        .filter(|w| !STOP_WORDS.iter().any(|s| w.eq_ignore_ascii_case(s)))
        .filter(|w| !w.chars().all(|c| c.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First integer in the text, or 1. Zero and overflowing literals also give 1.
pub fn extract_quantity(text: &str) -> u32 {
    INTEGER_RE
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|&q| q >= 1)
        .unwrap_or(1)
}

fn parse_search(text: &str) -> SearchQuery {
    let mut remainder = text.to_string();
    let mut brand = None;

    if let Some(caps) = BRAND_RE.captures(text) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            brand = Some(name.as_str().trim().to_string()).filter(|b| !b.is_empty());
            remainder.replace_range(whole.start()..name.end(), " ");
        }
    }

    let max_price = capture_price(&MAX_PRICE_RE, text);
    let min_price = capture_price(&MIN_PRICE_RE, text);

    let stripped = SEARCH_KEYWORD_RE.replace_all(&remainder, " ");
    let stripped = NUMBER_RE.replace_all(&stripped, " ");
    let query = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    SearchQuery {
        query,
        brand,
        min_price,
        max_price,
    }
}

fn capture_price(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whitespace tokens with surrounding punctuation trimmed ("milk." -> "milk").
/// Inner apostrophes survive so "don't" stays one word.
fn words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .collect()
}

fn contains_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| text.contains(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn add(name: &str, quantity: u32, category: Category) -> Intent {
        Intent::Add {
            name: name.to_string(),
            quantity,
            category,
        }
    }

    fn remove(name: &str) -> Intent {
        Intent::Remove {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_add_milk() {
        assert_eq!(interpret("add milk"), add("milk", 1, Category::Dairy));
    }

    #[test]
    fn test_i_need_two_apples() {
        assert_eq!(interpret("I need 2 apples"), add("apples", 2, Category::Produce));
    }

    #[test]
    fn test_remove_milk() {
        assert_eq!(interpret("remove milk"), remove("milk"));
    }

    #[test]
    fn test_find_bread_under_five() {
        assert_eq!(
            interpret("find bread under $5"),
            Intent::Search(SearchQuery {
                query: "bread".to_string(),
                max_price: Some(5.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_search_beats_other_triggers() {
        for text in [
            "add milk and find eggs",
            "remove the search for bread",
            "I need to look for cheese",
            "delete findings",
        ] {
            assert!(
                matches!(interpret(text), Intent::Search(_)),
                "{text} should be a search"
            );
        }
    }

    #[test]
    fn test_search_with_brand_and_price_range() {
        let Intent::Search(q) = interpret("Search for yogurt by Chobani over $1.50 under 4") else {
            panic!("expected search");
        };
        assert_eq!(q.query, "yogurt");
        assert_eq!(q.brand.as_deref(), Some("chobani"));
        assert_eq!(q.min_price, Some(1.5));
        assert_eq!(q.max_price, Some(4.0));
    }

    #[test]
    fn test_search_multi_word_hyphenated_brand() {
        let Intent::Search(q) = interpret("find ice cream by ben-and jerrys") else {
            panic!("expected search");
        };
        assert_eq!(q.query, "ice cream");
        assert_eq!(q.brand.as_deref(), Some("ben-and jerrys"));
    }

    #[test]
    fn test_search_brand_with_accents() {
        let Intent::Search(q) = interpret("find chocolate by Nestlé") else {
            panic!("expected search");
        };
        assert_eq!(q.query, "chocolate");
        assert_eq!(q.brand.as_deref(), Some("nestlé"));
    }

    #[test]
    fn test_search_with_empty_query() {
        let Intent::Search(q) = interpret("find something under 3") else {
            panic!("expected search");
        };
        assert_eq!(q.query, "something");

        assert_eq!(interpret("find"), Intent::Search(SearchQuery::default()));
    }

    #[test]
    fn test_add_trigger_variants() {
        assert_eq!(
            interpret("pick up 3 bananas"),
            add("bananas", 3, Category::Produce)
        );
        assert_eq!(
            interpret("I forgot to get the bread"),
            add("bread", 1, Category::Bakery)
        );
        assert_eq!(
            interpret("um grab some orange juice please"),
            add("orange juice", 1, Category::Produce)
        );
        assert_eq!(
            interpret("Add paper towels to my list."),
            add("paper towels", 1, Category::Household)
        );
    }

    #[test]
    fn test_remove_trigger_variants() {
        assert_eq!(interpret("take off the eggs"), remove("eggs"));
        assert_eq!(interpret("cross out the cheddar"), remove("cheddar"));
        assert_eq!(interpret("I don't need butter"), remove("butter"));
    }

    #[test]
    fn test_add_triggers_match_inside_words() {
        // "get" sits inside "forget" and "nuggets", "put" inside "input"
        assert_eq!(interpret("forget the chips"), add("chips", 1, Category::Snacks));
        assert_eq!(interpret("cancel nuggets"), add("nuggets", 1, Category::Other));
        assert_eq!(
            interpret("remove input cable"),
            add("input cable", 1, Category::Other)
        );
    }

    #[test]
    fn test_add_checked_before_remove() {
        // both "add" and "remove" appear; add wins by priority
        assert_eq!(
            interpret("add salsa and remove chips"),
            add("salsa and chips", 1, Category::Snacks)
        );
    }

    #[test]
    fn test_bare_item_falls_back_to_add() {
        assert_eq!(interpret("Bagels"), add("bagels", 1, Category::Bakery));
        assert_eq!(interpret("6 eggs"), add("eggs", 6, Category::Other));
    }

    #[test]
    fn test_unknown_inputs() {
        assert_eq!(interpret(""), Intent::Unknown);
        assert_eq!(interpret("   \t "), Intent::Unknown);
        assert_eq!(interpret("42"), Intent::Unknown);
        assert_eq!(interpret("um uh"), Intent::Unknown);
    }

    #[test]
    fn test_trigger_with_only_numbers_keeps_empty_name() {
        assert_eq!(interpret("add 5"), add("", 5, Category::Other));
        assert_eq!(interpret("remove"), remove(""));
    }

    #[test]
    fn test_quantity_extraction() {
        assert_eq!(extract_quantity("add milk"), 1);
        assert_eq!(extract_quantity("add 12 eggs and 2 milk"), 12);
        assert_eq!(extract_quantity("add 0 eggs"), 1);
        assert_eq!(extract_quantity("add 99999999999 eggs"), 1);
    }

    #[test]
    fn test_item_name_extraction() {
        assert_eq!(extract_item_name("i have to get 2 the um cheese"), "cheese");
        assert_eq!(extract_item_name("add  red   onions"), "red onions");
        assert_eq!(extract_item_name("add 2"), "");
    }

    #[test]
    fn test_interpret_is_pure() {
        let text = "I should get 4 frozen pizzas";
        assert_eq!(interpret(text), interpret(text));
        assert_eq!(interpret(text), add("frozen pizzas", 4, Category::Frozen));
    }

    #[test]
    fn test_custom_category_table() {
        let interpreter =
            Interpreter::new(CategoryTable::new([(Category::Household, &["candle"][..])]));
        assert_eq!(
            interpreter.interpret("buy candles"),
            add("candles", 1, Category::Household)
        );
        assert_eq!(
            interpreter.interpret("buy milk"),
            add("milk", 1, Category::Other)
        );
    }
}
