//! Subway CLI library.
//!
//! This crate provides command-line interface utilities for the subway path
//! finder, including terminal styling and output formatting.

pub mod output;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
