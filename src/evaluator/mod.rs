//! Evaluation of parsed programs.
//!
//! The evaluator walks the AST through the same `Visitor` contract as the
//! type checker, producing runtime `Value`s instead of static types.

pub mod evaluator;
pub mod value;
