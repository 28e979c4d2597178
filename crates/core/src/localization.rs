//! Translation fallbacks.
//!
//! The real localization tables live in the surrounding app; the engine only
//! resolves keys through the `Translator` seam. This module provides two
//! implementations: a catalog backed by an in-memory template table, and a
//! key-echoing fallback used in development builds and tests.

use std::collections::HashMap;

use crate::traits::Translator;

/// Echoes the translation key, appending interpolation arguments in sorted
/// order so output is deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str, args: &HashMap<&str, String>) -> String {
        if args.is_empty() {
            return key.to_string();
        }

        let mut pairs: Vec<_> = args.iter().collect();
        pairs.sort_by_key(|(name, _)| **name);

        let rendered: Vec<String> = pairs
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();

        format!("{} {}", key, rendered.join(" "))
    }
}

/// Catalog of `{arg}`-style templates keyed by translation key.
/// Missing keys fall back to key echoing.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    templates: HashMap<String, String>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template for a key.
    pub fn with_template(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(key.into(), template.into());
        self
    }
}

impl Translator for StaticCatalog {
    fn translate(&self, key: &str, args: &HashMap<&str, String>) -> String {
        match self.templates.get(key) {
            Some(template) => {
                let mut rendered = template.clone();
                for (name, value) in args {
                    rendered = rendered.replace(&format!("{{{}}}", name), value);
                }
                rendered
            }
            None => KeyTranslator.translate(key, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_translator_echoes_key() {
        assert_eq!(KeyTranslator.t("alerts.clock_skew.title"), "alerts.clock_skew.title");
    }

    #[test]
    fn test_key_translator_appends_sorted_args() {
        let args = HashMap::from([
            ("days", "2".to_string()),
            ("date", "January 1, 1970".to_string()),
        ]);
        assert_eq!(
            KeyTranslator.translate("banner.title", &args),
            "banner.title date=January 1, 1970 days=2"
        );
    }

    #[test]
    fn test_catalog_substitutes_args() {
        let catalog = StaticCatalog::new()
            .with_template("banner.title", "Expires in {days} days");
        let args = HashMap::from([("days", "2".to_string())]);

        assert_eq!(catalog.translate("banner.title", &args), "Expires in 2 days");
        assert_eq!(catalog.t("missing.key"), "missing.key");
    }
}
