//! Extraction settings: the category keyword table, the boilerplate
//! exclusion list and the sentinel/default labels.
//!
//! Everything here is plain data so a deployment can override it from a
//! config file; `Default` carries the stock Chilean credit-card setup.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "CONSUMO";
pub const NO_PLACE: &str = "SIN LUGAR";
pub const INSTALLMENT_KEYWORD: &str = "CUOTA";

/// Statement boilerplate markers; a row mentioning any of them is not a purchase.
pub const EXCLUDE_KEYWORDS: &[&str] = &[
    "TOTAL OPERACIONES",
    "MONTO CANCELADO",
    "MOVIMIENTOS TARJETA",
    "PAGAR HASTA",
    "FACTURADO",
];

/// Stock keyword table. More specific keywords sit before the broader
/// keywords they contain ("UBER EATS" before "UBER").
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("COMERCIAL DECOSTORE", "DECORACION"),
    ("MERCADO PAGO 4 TCOM", "GYM"),
    ("UBER EATS", "DELIVERY"),
    ("UBER TRIP", "MOVILIDAD"),
    ("UBER", "MOVILIDAD"),
    ("TAXI", "MOVILIDAD"),
    ("RAPPI", "DELIVERY"),
    ("NIU", "DELIVERY"),
    ("MED", "MEDICO"),
    ("CRUZ VERDE", "MEDICO"),
    ("AHUM", "MEDICO"),
    ("SII", "SII"),
    ("SODIMAC", "DECORACION"),
    ("TOTTUS", "SUPERMERCADO"),
    ("JUMBO", "SUPERMERCADO"),
    ("BIRRA", "SALIDA/BAR"),
    ("BAR", "SALIDA/BAR"),
    ("ENTEL", "SERVICIOS"),
    ("AGUAS CORDILLERA", "SUPERMERCADO"),
    ("PLAYSTATION", "SUBSCRIPCION"),
    ("BOCAJUNIORS", "SUBSCRIPCION"),
    ("NETFLIX", "SUBSCRIPCION"),
    ("AMAZON", "SUBSCRIPCION"),
    ("APPLE", "SUBSCRIPCION"),
    ("GUACAMOLE", "DELIVERY"),
    ("FANTASILANDIA", "SALIDA/BAR"),
    ("MACONLINE", "SEGURO"),
    ("LATAM", "VUELOS"),
    ("COMUNIDAD FELIZ", "SERVICIOS"),
    ("TICKET MASTER", "SALIDAS/BAR"),
    ("NUI SUSHI", "DELIVERY"),
];

/// A single keyword → category entry. Order inside
/// [`ExtractionConfig::categories`] is significant: first match wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRule {
    pub keyword: String,
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Category for descriptions no keyword matches
    pub default_category: String,
    /// Place value for lines that start with the date
    pub no_place: String,
    /// Word marking installment rows (matched case-insensitively)
    pub installment_keyword: String,
    /// Rows whose place/description contain any of these are dropped
    pub exclude_keywords: Vec<String>,
    pub categories: Vec<CategoryRule>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            no_place: NO_PLACE.to_string(),
            installment_keyword: INSTALLMENT_KEYWORD.to_string(),
            exclude_keywords: EXCLUDE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            categories: DEFAULT_RULES
                .iter()
                .map(|(k, c)| CategoryRule::new(*k, *c))
                .collect(),
        }
    }
}

impl ExtractionConfig {
    /// Same settings with a different keyword table
    pub fn with_categories(mut self, categories: Vec<CategoryRule>) -> Self {
        self.categories = categories;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_specific_keywords_come_first() {
        let cfg = ExtractionConfig::default();
        let pos = |kw: &str| cfg.categories.iter().position(|r| r.keyword == kw).unwrap();
        assert!(pos("UBER EATS") < pos("UBER"));
        assert!(pos("UBER TRIP") < pos("UBER"));
        assert!(pos("BIRRA") < pos("BAR"));
        assert_eq!(cfg.categories.len(), 31);
    }

    #[test]
    fn test_default_labels() {
        let cfg = ExtractionConfig::default();
        assert_eq!(cfg.default_category, "CONSUMO");
        assert_eq!(cfg.no_place, "SIN LUGAR");
        assert_eq!(cfg.exclude_keywords.len(), 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults_and_rule_order() {
        let cfg: ExtractionConfig = toml::from_str(
            r#"
default_category = "OTROS"

[[categories]]
keyword = "STARBUCKS"
category = "CAFE"

[[categories]]
keyword = "STAR"
category = "ESTRELLA"
"#,
        )
        .unwrap();

        assert_eq!(cfg.default_category, "OTROS");
        assert_eq!(cfg.no_place, "SIN LUGAR");
        assert_eq!(cfg.exclude_keywords, ExtractionConfig::default().exclude_keywords);
        assert_eq!(cfg.categories[0], CategoryRule::new("STARBUCKS", "CAFE"));
        assert_eq!(cfg.categories[1].keyword, "STAR");
    }
}
