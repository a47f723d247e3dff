//! gear-calc CLI library.
//!
//! Argument parsing and output formatting shared by the `gear-calc` binary.

pub mod input;
pub mod output;
