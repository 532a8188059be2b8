//! Drops classified rows that are statement boilerplate rather than purchases.

use anyhow::Result;
use regex::Regex;

use crate::DATE_PATTERN;
use crate::types::RawRow;

/// Why a row was not accepted as a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Place or description contains a boilerplate keyword
    ExcludedKeyword(String),
    /// Description holds a second date; header/footer lines look like this.
    /// Known to misfire on descriptions that legitimately contain a date.
    EmbeddedDate,
}

pub struct RowValidator {
    exclude_keywords: Vec<String>,
    date_re: Regex,
}

impl RowValidator {
    pub fn new<S: AsRef<str>>(exclude_keywords: &[S]) -> Result<Self> {
        Ok(Self {
            exclude_keywords: exclude_keywords
                .iter()
                .map(|k| k.as_ref().to_uppercase())
                .collect(),
            date_re: Regex::new(DATE_PATTERN)?,
        })
    }

    pub fn rejection(&self, row: &RawRow) -> Option<Rejection> {
        let combined = format!("{} {}", row.place, row.description).to_uppercase();
        if let Some(kw) = self.exclude_keywords.iter().find(|kw| combined.contains(kw.as_str())) {
            return Some(Rejection::ExcludedKeyword(kw.clone()));
        }
        if self.date_re.is_match(&row.description) {
            return Some(Rejection::EmbeddedDate);
        }
        None
    }

    pub fn is_transaction(&self, row: &RawRow) -> bool {
        self.rejection(row).is_none()
    }
}
