//! Best-effort PDF text extraction.
//!
//! Court archives routinely contain a few damaged files among
//! thousands, so a document that cannot be opened or has no text layer
//! degrades to an empty string instead of failing the batch.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    // Inline image placeholders left behind by some text layers.
    static ref IMAGE_TAG: Regex = Regex::new(r"<image:.+?>").unwrap();
}

/// Full text of the PDF at `path`, or an empty string if it cannot be
/// read.
pub fn extract_text(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => IMAGE_TAG.replace_all(&text, "").trim().to_string(),
        Err(err) => {
            warn!(path = %path.display(), %err, "could not extract text, using empty document");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_path_degrades_to_empty() {
        let text = extract_text(Path::new("/nonexistent/case.pdf"));
        assert_eq!(text, "");
    }

    #[test]
    fn image_tags_are_stripped() {
        let cleaned = IMAGE_TAG.replace_all("before <image: blob> after", "");
        assert_eq!(cleaned, "before  after");
    }
}
