//! Shared domain types for the court-record extraction pipeline
//!
//! This crate holds the entities every other crate consumes: the
//! per-case [`Document`] text pair, the columnar [`Table`] container
//! handed to output adapters, and the typed run [`Config`].

pub mod config;
pub mod document;
pub mod error;
pub mod table;

pub use config::{Config, TableSelection};
pub use document::{flatten, Document};
pub use error::TableError;
pub use table::{Cell, Column, Table, Tabular};
