//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates, print_constraints, print_filter_result, print_record, print_score_result,
};
