//! Credit-card statement line classifier (text)
//!
//! Expected rows after PDF-to-text, one purchase per line:
//!   UBER TRIP 05/03/24 VIAJE A CASA $4.500
//!   05/03/24 CUOTA 2/6 $13.859,00
//!   SANTIAGO 12/03/2024 RAPPI*RESTAURANT $ 15.990 $ 15.990
//!
//! Place is whatever precedes the first date, the description runs from
//! the date to the last `$`, and the amount is the last `$` amount.

use anyhow::Result;
use regex::Regex;

use crate::DATE_PATTERN;
use crate::types::RawRow;

pub struct LineClassifier {
    date_re: Regex,
    amount_re: Regex,
    no_place: String,
}

impl LineClassifier {
    pub fn new(no_place: impl Into<String>) -> Result<Self> {
        let date_re = Regex::new(DATE_PATTERN)?;
        let amount_re = Regex::new(concat!(
            r"\$\s*",
            r"(?P<amt>[-–]?\d{1,3}(?:\.\d{3})*(?:[.,]\d{2})?)"
        ))?;

        Ok(Self {
            date_re,
            amount_re,
            no_place: no_place.into(),
        })
    }

    /// Split one line into raw fields, or `None` if it is not a
    /// transaction line (no `$`, no date, or no amount after a `$`).
    pub fn classify(&self, line: &str) -> Option<RawRow> {
        if !line.contains('$') {
            return None;
        }
        let date = self.date_re.find(line)?;

        let place = line[..date.start()].trim();
        let place = if place.is_empty() { self.no_place.as_str() } else { place };

        // Statements sometimes echo an amount before the charged one.
        let amount_text = self
            .amount_re
            .captures_iter(line)
            .last()?
            .name("amt")?
            .as_str()
            .to_string();

        // Cut at the last literal `$`, not at the last amount match, so a
        // suffix glued to the amount does not leak into the description.
        let last_dollar = line.rfind('$')?;
        let description = if last_dollar > date.end() {
            line[date.end()..last_dollar].trim()
        } else {
            ""
        };

        Some(RawRow {
            date: date.as_str().to_string(),
            place: place.to_string(),
            description: description.to_string(),
            amount_text,
        })
    }
}
