//! Statement layout parsers

pub mod card_statement;
