//! Table assembly: turns extracted documents into named, column-typed
//! tables, the identity-pairing template, and the voting-rights
//! roll-up, and writes them out as CSV or JSON.

pub mod export;
pub mod pairs;
pub mod pipeline;
pub mod tables;
pub mod vrr;

pub use export::{write_table, ExportError};
pub use pairs::PairRow;
pub use pipeline::Pipeline;
pub use vrr::VrrRow;
