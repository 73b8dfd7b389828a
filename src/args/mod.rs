//! Command-line argument handling.

mod definition;

pub use definition::Args;
