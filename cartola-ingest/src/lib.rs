//! cartola-ingest: statement text → raw rows. Locale amount parsing, line
//! classification, boilerplate filtering, installment detection and the
//! PDF text extraction step.

pub mod amount;
pub mod installment;
pub mod parsers;
pub mod pdf_text;
pub mod types;
pub mod validator;

pub use amount::normalize_amount;
pub use installment::InstallmentParser;
pub use parsers::card_statement::LineClassifier;
pub use pdf_text::{extract_pdf_text, read_statement_text};
pub use types::RawRow;
pub use validator::{Rejection, RowValidator};

/// dd/mm/yy or dd/mm/yyyy, as printed on statements
pub const DATE_PATTERN: &str = r"\d{2}/\d{2}/\d{2,4}";
