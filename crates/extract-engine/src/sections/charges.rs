//! Isolates raw charge lines from the filing and disposition tables.

use docket_types::Document;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A charge entry: 3-digit number, 4-char code, then anything up to
    // and including the statute cite and its uppercase tail.
    static ref CHARGE_LINE: Regex =
        Regex::new(r"\d{3}\s[A-Z0-9]{4}.{1,200}?.{3}-.{3}-.{3}[^a-z\n]{0,75}").unwrap();
    // Lowercase runs are page furniture (headers, labels) bleeding
    // into the match window.
    static ref PAGE_FURNITURE: Regex = Regex::new(r"[A-Z][a-z][A-Za-z\s\$]+.+").unwrap();
}

/// All charge lines of a document, cleaned and in source order.
pub fn explode(doc: &Document) -> Vec<String> {
    CHARGE_LINE
        .find_iter(&doc.full_text)
        .map(|m| {
            PAGE_FURNITURE
                .replace_all(m.as_str(), "")
                .trim()
                .to_string()
        })
        .collect()
}
