//! Document text store
//!
//! Obtains and caches the full text of each input case document, either
//! by extracting the text layer from source PDFs or by re-ingesting a
//! previously written archive. Downstream parsers only ever see
//! [`docket_types::Document`] values.

pub mod error;
pub mod extract;
pub mod store;

pub use error::TextStoreError;
pub use store::{ArchiveRow, DocumentStore};
