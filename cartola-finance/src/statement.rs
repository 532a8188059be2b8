//! Statement text → transaction table → summary.
//!
//! Each line is handled on its own: classify, drop boilerplate, normalize
//! the amount, detect installments, categorize. A bad line is skipped and
//! never aborts the document.

use anyhow::Result;
use cartola_core::{ExtractionConfig, StatementReport, Transaction};
use cartola_ingest::{InstallmentParser, LineClassifier, RowValidator, normalize_amount};
use tracing::{debug, info};

use crate::category_rules::CategoryRules;
use crate::summary::summarize;

/// Compiled pipeline for one configuration. Holds no per-run state, so a
/// single extractor can process any number of documents.
pub struct StatementExtractor {
    classifier: LineClassifier,
    validator: RowValidator,
    installments: InstallmentParser,
    rules: CategoryRules,
}

impl StatementExtractor {
    pub fn new(cfg: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new(cfg.no_place.as_str())?,
            validator: RowValidator::new(&cfg.exclude_keywords)?,
            installments: InstallmentParser::new(&cfg.installment_keyword)?,
            rules: CategoryRules::from_config(cfg),
        })
    }

    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    /// Structured transactions in source line order.
    pub fn structure(&self, text: &str) -> Vec<Transaction> {
        let mut out = Vec::new();

        for (n, line) in text.lines().enumerate() {
            let Some(raw) = self.classifier.classify(line) else {
                continue;
            };
            if let Some(reason) = self.validator.rejection(&raw) {
                debug!(line = n + 1, ?reason, "dropped non-transaction row");
                continue;
            }

            let amount = normalize_amount(&raw.amount_text);
            if amount.is_none() {
                debug!(line = n + 1, amount = %raw.amount_text, "unparseable amount");
            }
            let (is_installment, installment) = self.installments.detect(&raw.description);
            let category = self.rules.categorize(&raw.description).to_string();

            out.push(Transaction {
                date: raw.date,
                place: raw.place,
                description: raw.description,
                amount,
                is_installment,
                installment,
                category,
            });
        }

        info!(lines = text.lines().count(), transactions = out.len(), "structured statement");
        out
    }

    /// Transaction table plus its per-category summary.
    pub fn extract(&self, text: &str) -> StatementReport {
        let transactions = self.structure(text);
        let summary = summarize(&transactions);
        StatementReport {
            transactions,
            summary,
        }
    }
}

/// One-shot extraction with a fresh extractor.
pub fn extract_statement(text: &str, cfg: &ExtractionConfig) -> Result<StatementReport> {
    Ok(StatementExtractor::new(cfg)?.extract(text))
}
