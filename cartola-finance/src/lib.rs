//! cartola-finance: categorization, statement structuring, per-category
//! summary and the CSV/summary PDF outputs.

pub mod category_rules;
pub mod export;
pub mod report;
pub mod statement;
pub mod summary;

pub use category_rules::CategoryRules;
pub use export::{write_transactions, write_transactions_csv};
pub use report::{SummaryLayout, layout_summary, render_pdf, write_summary_pdf};
pub use statement::{StatementExtractor, extract_statement};
pub use summary::{format_currency, summarize};
