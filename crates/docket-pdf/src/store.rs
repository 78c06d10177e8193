//! Batch ingestion of case documents.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use docket_types::Document;
use rayon::prelude::*;
use tracing::debug;

use crate::error::TextStoreError;
use crate::extract::extract_text;

/// One line of a previously written text archive (JSON lines).
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ArchiveRow {
    pub id: String,
    pub text: String,
}

/// Ingests source documents and presents them as [`Document`]s.
pub struct DocumentStore;

impl DocumentStore {
    /// Extract text from every path, in parallel. Output length equals
    /// input length and preserves input order; unreadable documents
    /// become empty-text entries.
    pub fn ingest_paths(paths: &[PathBuf]) -> Vec<Document> {
        let docs: Vec<Document> = paths
            .par_iter()
            .map(|p| Document::new(p.display().to_string(), extract_text(p)))
            .collect();
        debug!(count = docs.len(), "ingested documents from paths");
        docs
    }

    /// Re-use previously extracted text without touching the PDFs.
    pub fn ingest_archive_rows(rows: Vec<ArchiveRow>) -> Vec<Document> {
        rows.into_iter()
            .map(|r| Document::new(r.id, r.text))
            .collect()
    }

    /// Read a JSON-lines archive from disk. Unlike per-document text
    /// extraction, a malformed archive is a caller error and is
    /// reported rather than defaulted.
    pub fn read_archive(path: &Path) -> Result<Vec<Document>, TextStoreError> {
        let file = std::fs::File::open(path)
            .map_err(|e| TextStoreError::ArchiveRead(e.to_string()))?;
        let reader = std::io::BufReader::new(file);
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| TextStoreError::ArchiveRead(e.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(serde_json::from_str::<ArchiveRow>(&line)?);
        }
        Ok(Self::ingest_archive_rows(rows))
    }

    /// Write documents back out as a JSON-lines archive.
    pub fn write_archive(path: &Path, docs: &[Document]) -> Result<(), TextStoreError> {
        let mut out = String::new();
        for doc in docs {
            let row = ArchiveRow {
                id: doc.id.clone(),
                text: doc.full_text.clone(),
            };
            out.push_str(&serde_json::to_string(&row)?);
            out.push('\n');
        }
        std::fs::write(path, out).map_err(|e| TextStoreError::ArchiveRead(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn archive_rows_become_documents_in_order() {
        let rows = vec![
            ArchiveRow {
                id: "a".into(),
                text: "first\ndoc".into(),
            },
            ArchiveRow {
                id: "b".into(),
                text: "second".into(),
            },
        ];
        let docs = DocumentStore::ingest_archive_rows(rows);
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "a");
        assert_eq!(docs[0].flat_text, "first doc");
        assert_eq!(docs[1].id, "b");
    }

    #[test]
    fn ingest_paths_output_len_matches_input_len() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let paths = vec![
            PathBuf::from("/nonexistent/one.pdf"),
            PathBuf::from("/nonexistent/two.pdf"),
        ];
        let docs = DocumentStore::ingest_paths(&paths);
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d.is_empty()));
        assert_eq!(docs[0].id, "/nonexistent/one.pdf");
    }

    #[test]
    fn archive_round_trip() {
        let dir = std::env::temp_dir().join("docket-pdf-test-archive");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("archive.jsonl");
        let docs = vec![
            Document::new("a", "line one\nline two"),
            Document::new("b", ""),
        ];
        DocumentStore::write_archive(&path, &docs).unwrap();
        let back = DocumentStore::read_archive(&path).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].full_text, "line one\nline two");
        assert_eq!(back[1].id, "b");
        std::fs::remove_file(&path).ok();
    }
}
