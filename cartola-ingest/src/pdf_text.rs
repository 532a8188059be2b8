//! Statement document → plain text, line breaks preserved.

use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::path::Path;
use tracing::info;

/// Extract the text layer of a statement PDF.
///
/// Fails when the document has no extractable text (scanned statements).
pub fn extract_pdf_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("opening {}", path.display()))?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow!("extracting text from {}: {}", path.display(), e))?;

    if text.trim().is_empty() {
        bail!("no extractable text in {}", path.display());
    }
    info!(path = %path.display(), bytes = text.len(), "extracted statement text");
    Ok(text)
}

/// Read statement text from a `.txt` dump or a PDF.
pub fn read_statement_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    if !is_text {
        return extract_pdf_text(path);
    }

    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if text.trim().is_empty() {
        bail!("{} is empty", path.display());
    }
    Ok(text)
}
