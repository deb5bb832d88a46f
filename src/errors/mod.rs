//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used throughout the pipeline:
//!
//! - Scanner and tokenizer failures, split into fatal and recoverable ones
//! - Parser failures with the offending token and its position
//! - Type-checking and value shape mismatches
//! - A unifying `Error` with names and suggestions for diagnostics

pub mod errors;
