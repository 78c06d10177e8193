//! Section exploders: one repeating block of a case document becomes
//! an ordered list of per-item rows.
//!
//! Every exploder keys its rows by the document's composite case
//! number and preserves the order items appear in the text.

pub mod attorneys;
pub mod case_action;
pub mod charges;
pub mod fees;
pub mod financial_history;
pub mod images;
pub mod sentences;
pub mod settings;
pub mod witnesses;

use docket_types::Document;

use crate::fields;

/// Join key shared by every per-case child row.
pub fn case_number(doc: &Document) -> String {
    fields::case_number(doc)
}
