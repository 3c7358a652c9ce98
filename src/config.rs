use std::env;

use crate::errors::AppError;

/// What to do with an add command whose item name comes out empty ("add 5").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyItemPolicy {
    Reject,
    Allow,
}

impl EmptyItemPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyItemPolicy::Reject => "reject",
            EmptyItemPolicy::Allow => "allow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(EmptyItemPolicy::Reject),
            "allow" => Some(EmptyItemPolicy::Allow),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub catalog_path: Option<String>,
    pub empty_add_policy: EmptyItemPolicy,
    pub suggestion_window: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            empty_add_policy: EmptyItemPolicy::Reject,
            suggestion_window: 25,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let empty_add_policy = match lookup("EMPTY_ADD_POLICY") {
            Some(raw) => EmptyItemPolicy::parse(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "EMPTY_ADD_POLICY must be \"reject\" or \"allow\", got {raw:?}"
                ))
            })?,
            None => defaults.empty_add_policy,
        };

        let suggestion_window = match lookup("SUGGESTION_WINDOW") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::Config(format!("SUGGESTION_WINDOW must be a number, got {raw:?}"))
            })?,
            None => defaults.suggestion_window,
        };

        Ok(Self {
            catalog_path: lookup("CATALOG_PATH").filter(|p| !p.trim().is_empty()),
            empty_add_policy,
            suggestion_window,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.empty_add_policy, EmptyItemPolicy::Reject);
        assert_eq!(config.suggestion_window, 25);
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CATALOG_PATH", "data/products.json"),
            ("EMPTY_ADD_POLICY", "Allow"),
            ("SUGGESTION_WINDOW", "10"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some("data/products.json"));
        assert_eq!(config.empty_add_policy, EmptyItemPolicy::Allow);
        assert_eq!(config.suggestion_window, 10);
    }

    #[test]
    fn test_blank_catalog_path_ignored() {
        let config = AppConfig::from_lookup(lookup_from(&[("CATALOG_PATH", "  ")])).unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_invalid_policy_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("EMPTY_ADD_POLICY", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_window_is_config_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("SUGGESTION_WINDOW", "lots")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
