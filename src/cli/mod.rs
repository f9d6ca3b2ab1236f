//! Command-line surface: argument parsing and report formatting

pub mod args;
pub mod output;
