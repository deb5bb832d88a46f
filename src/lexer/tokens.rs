use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::TokenizerError, Span};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("false", TokenKind::Bool);
        map.insert("true", TokenKind::Bool);
        map.insert("for", TokenKind::For);
        map.insert("print", TokenKind::Print);
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("while", TokenKind::While);
        map.insert("opt", TokenKind::Opt);
        map.insert("get", TokenKind::Get);
        map.insert("empty", TokenKind::Empty);
        map.insert("def", TokenKind::Def);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Times);
        map.insert("=", TokenKind::Assign);
        map.insert("==", TokenKind::Eq);
        map.insert("::", TokenKind::Prefix);
        map.insert(":", TokenKind::In);
        map.insert("(", TokenKind::OpenPar);
        map.insert(")", TokenKind::ClosePar);
        map.insert(";", TokenKind::StmtSep);
        map.insert(",", TokenKind::ExpSep);
        map.insert("{", TokenKind::OpenBlock);
        map.insert("}", TokenKind::CloseBlock);
        map.insert("[", TokenKind::OpenList);
        map.insert("]", TokenKind::CloseList);
        map.insert("&&", TokenKind::And);
        map.insert("!", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Ident,
    Num,
    Bool,

    // Reserved
    For,
    Print,
    Var,
    If,
    Else,
    Do,
    While,
    Opt,
    Get,
    Empty,
    Def,

    Plus,   // +
    Minus,  // -
    Times,  // *
    Assign, // =
    Eq,     // ==
    Prefix, // ::
    In,     // :

    OpenPar,
    ClosePar,
    StmtSep, // ;
    ExpSep,  // ,
    OpenBlock,
    CloseBlock,
    OpenList,
    CloseList,

    And, // &&
    Not, // !
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The decoded payload of a token, if its kind carries one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    None,
    Int(i64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The text exactly as matched, e.g. `0b101` for a binary literal.
    pub value: String,
    pub span: Span,
    pub(crate) literal: Literal,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literal {
            Literal::Int(value) => write!(f, "{}({})", self.kind, value),
            Literal::Bool(value) => write!(f, "{}({})", self.kind, value),
            Literal::None if self.kind == TokenKind::Ident => {
                write!(f, "{}({:?})", self.kind, self.value)
            }
            Literal::None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn int_value(&self) -> Result<i64, TokenizerError> {
        match self.literal {
            Literal::Int(value) => Ok(value),
            _ => Err(TokenizerError::WrongTokenKind {
                expected: TokenKind::Num,
                found: self.kind,
            }),
        }
    }

    pub fn bool_value(&self) -> Result<bool, TokenizerError> {
        match self.literal {
            Literal::Bool(value) => Ok(value),
            _ => Err(TokenizerError::WrongTokenKind {
                expected: TokenKind::Bool,
                found: self.kind,
            }),
        }
    }

    /// The payload of an `opt` token. The keyword carries none, so this is
    /// always `Literal::None` once the kind check passes.
    pub fn opt_value(&self) -> Result<Literal, TokenizerError> {
        if self.kind != TokenKind::Opt {
            return Err(TokenizerError::WrongTokenKind {
                expected: TokenKind::Opt,
                found: self.kind,
            });
        }
        Ok(self.literal)
    }
}
