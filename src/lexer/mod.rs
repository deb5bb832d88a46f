//! Lexical analysis module for the interpreter.
//!
//! This module contains the scanner and tokenizer that turn a character
//! source into a stream of tokens for parsing. It handles:
//!
//! - Anchored matching of one composed regex, line by line
//! - Recognition of keywords, identifiers, literals, and symbols
//! - Decimal and `0b` binary integer literals
//! - Dropping whitespace and `//` comments

pub mod lexer;
pub mod scanner;
pub mod tokens;

#[cfg(test)]
mod tests;
