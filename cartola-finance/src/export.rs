//! Transaction table → delimited text for spreadsheets.

use anyhow::{Context, Result};
use cartola_core::Transaction;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const TRANSACTION_COLUMNS: [&str; 8] = [
    "FECHA",
    "LUGAR",
    "DETALLE",
    "VALOR",
    "FG_CUOTA",
    "N_CUOTA",
    "CUOTAS_TOT",
    "GRUPO",
];

/// Excel only detects UTF-8 in a CSV when it starts with a BOM.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the header plus one record per transaction. Missing amounts and
/// installment counts are empty cells.
pub fn write_transactions<W: Write>(writer: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TRANSACTION_COLUMNS)?;

    for t in txns {
        let amount = t.amount.map(|a| a.to_string()).unwrap_or_default();
        let index = t.installment_index().map(|n| n.to_string()).unwrap_or_default();
        let total = t.installment_total().map(|n| n.to_string()).unwrap_or_default();
        let flag = if t.is_installment { "1" } else { "0" };

        wtr.write_record([
            t.date.as_str(),
            t.place.as_str(),
            t.description.as_str(),
            amount.as_str(),
            flag,
            index.as_str(),
            total.as_str(),
            t.category.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write `transactions.csv`-style output to `path`, BOM first.
pub fn write_transactions_csv(path: impl AsRef<Path>, txns: &[Transaction]) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(UTF8_BOM)?;
    write_transactions(&mut file, txns).with_context(|| format!("writing {}", path.display()))
}
