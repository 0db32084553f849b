//! Diagnostics produced while parsing.
//!
//! This module defines the error types recorded by the parser. It includes:
//!
//! - The `ErrorImpl` variants for each kind of syntax error
//! - The canonical message each variant renders to
//! - Short suggestions shown next to a diagnostic

pub mod errors;
