//! Installment ("cuota") detection: a row is an installment when its
//! description mentions the keyword; a trailing "n/m" gives its position.

use anyhow::Result;
use cartola_core::Installment;
use regex::Regex;

pub struct InstallmentParser {
    keyword: String,
    suffix_re: Regex,
}

impl InstallmentParser {
    pub fn new(keyword: &str) -> Result<Self> {
        Ok(Self {
            keyword: keyword.to_uppercase(),
            suffix_re: Regex::new(r"(?P<n>[0-9]{1,2})/(?P<m>[0-9]{1,2})\s*$")?,
        })
    }

    pub fn is_installment(&self, description: &str) -> bool {
        description.to_uppercase().contains(&self.keyword)
    }

    /// Trailing "n/m" counts, regardless of the keyword
    pub fn counts(&self, description: &str) -> Option<Installment> {
        let caps = self.suffix_re.captures(description)?;
        Some(Installment {
            index: caps["n"].parse().ok()?,
            total: caps["m"].parse().ok()?,
        })
    }

    /// Installment flag plus counts; non-installment rows never carry counts.
    pub fn detect(&self, description: &str) -> (bool, Option<Installment>) {
        if self.is_installment(description) {
            (true, self.counts(description))
        } else {
            (false, None)
        }
    }
}
