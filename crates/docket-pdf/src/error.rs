use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextStoreError {
    #[error("failed to read archive: {0}")]
    ArchiveRead(String),

    #[error("failed to parse archive row: {0}")]
    ArchiveParse(#[from] serde_json::Error),
}
