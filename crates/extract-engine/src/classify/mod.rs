//! Charge parsing and voting-rights classification.

pub mod charge;
pub mod codes;
pub mod fillers;
