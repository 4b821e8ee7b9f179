//! mal printer.
//!
//! Two modes:
//!
//! - **readable**: strings are quoted and escaped, so the output of a value
//!   built from numbers, symbols, booleans, `nil`, strings and lists reads
//!   back as an equal value. Used by the REPL result line and `prn`.
//! - **display**: strings are written raw. Used by `str`.
//!
//! Functions print as opaque placeholders in both modes.

mod printer;

pub use printer::{format_number, render, render_all, Printer};
