//! Keyword category rules: ordered substring lookup over the upper-cased
//! description, falling back to a default category.

use cartola_core::{CategoryRule, ExtractionConfig};

#[derive(Debug, Clone)]
pub struct CategoryRules {
    /// (upper-cased keyword, category), in declaration order
    rules: Vec<(String, String)>,
    default_category: String,
}

impl CategoryRules {
    pub fn new(rules: &[CategoryRule], default_category: impl Into<String>) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|r| (r.keyword.to_uppercase(), r.category.clone()))
                .collect(),
            default_category: default_category.into(),
        }
    }

    pub fn from_config(cfg: &ExtractionConfig) -> Self {
        Self::new(&cfg.categories, cfg.default_category.as_str())
    }

    /// Category of the first declared keyword found in `description`.
    /// Declaration order decides, not position in the text.
    pub fn categorize(&self, description: &str) -> &str {
        let desc = description.to_uppercase();
        self.rules
            .iter()
            .find(|(keyword, _)| desc.contains(keyword.as_str()))
            .map(|(_, category)| category.as_str())
            .unwrap_or(self.default_category.as_str())
    }
}
