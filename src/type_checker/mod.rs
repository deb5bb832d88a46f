//! Type checking and semantic analysis module.
//!
//! This module performs static checking of a parsed program before it runs:
//!
//! - Inferring the type of every expression
//! - Checking operators, list literals and `::` against their operand types
//! - Resolving variable references through nested scopes
//! - Rejecting redeclarations and assignments to undeclared variables

pub mod type_checker;
pub mod types;

#[cfg(test)]
mod tests;
