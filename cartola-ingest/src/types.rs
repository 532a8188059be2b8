/// A statement line split into its raw fields, before validation and
/// amount normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    /// Already trimmed; the no-place sentinel when nothing precedes the date
    pub place: String,
    pub description: String,
    /// Last `$` amount on the line, still in locale format ("13.859,00")
    pub amount_text: String,
}
