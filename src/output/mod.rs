//! Terminal output formatting
//!
//! Display utilities for line-mode play and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, write_statistics};
