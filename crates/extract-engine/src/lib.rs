//! Field extraction, section explosion, and charge classification.
//!
//! Everything in this crate is a pure function of one document's text:
//! field extractors produce one [`cases::CaseRecord`] per document,
//! section exploders split each repeating block (charges, fees,
//! sentences, ...) into ordered per-item rows, and the charge
//! classifier derives the legal classification flags used by the
//! voting-rights roll-up. Non-matching input always degrades to the
//! field's default value; nothing here raises on malformed text.

#![recursion_limit = "256"]

pub mod capture;
pub mod cases;
pub mod classify;
pub mod fields;
pub mod sections;

pub use cases::CaseRecord;
pub use classify::charge::{ChargeContext, ChargeRow};
