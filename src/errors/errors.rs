use std::{fmt::Display, io};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// Failures raised while matching the composed lexical pattern.
#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("unrecognised character {text:?} at {position}")]
    Malformed { text: String, position: Position },
    #[error("failed to read input at {position}")]
    Io {
        position: Position,
        #[source]
        source: io::Error,
    },
    #[error("no more input to scan")]
    Exhausted,
}

impl ScannerError {
    /// Malformed text can be reported and skipped, everything else ends the scan.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScannerError::Malformed { .. })
    }

    pub fn get_position(&self) -> Option<&Position> {
        match self {
            ScannerError::Malformed { position, .. } | ScannerError::Io { position, .. } => {
                Some(position)
            }
            ScannerError::Exhausted => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("could not read the next token")]
    Scan(#[from] ScannerError),
    #[error("integer literal {text:?} at {position} is out of range")]
    NumberOutOfRange { text: String, position: Position },
    #[error("no current token, call advance() first")]
    NoCurrentToken,
    #[error("expected a {expected} token, found {found}")]
    WrongTokenKind {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("attempted to read past the end of input")]
    PastEnd,
}

impl TokenizerError {
    pub fn is_fatal(&self) -> bool {
        match self {
            TokenizerError::Scan(cause) => cause.is_fatal(),
            TokenizerError::NumberOutOfRange { .. } => false,
            _ => true,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        match self {
            TokenizerError::Scan(cause) => cause.get_position(),
            TokenizerError::NumberOutOfRange { position, .. } => Some(position),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypecheckerError {
    #[error("expected type {expected}, found {found}")]
    Mismatch { expected: String, found: String },
    #[error("undeclared variable {name:?} at {position}")]
    UndeclaredVariable { name: String, position: Position },
    #[error("variable {name:?} already declared at {position}")]
    AlreadyDeclared { name: String, position: Position },
}

impl TypecheckerError {
    pub fn mismatch(expected: impl Display, found: impl Display) -> Self {
        TypecheckerError::Mismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("expecting {expected} value, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("expecting a value in an opt, found empty")]
    EmptyOption,
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error("unexpected token {token:?} at {position}, expected {expected}")]
    UnexpectedToken {
        token: String,
        expected: String,
        position: Position,
    },
}

#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error("undeclared variable {name:?} at {position}")]
    UndeclaredVariable { name: String, position: Position },
    #[error("variable {name:?} already declared at {position}")]
    AlreadyDeclared { name: String, position: Position },
    #[error("failed to write program output")]
    Output(#[from] io::Error),
}

/// Any failure surfaced by the driver, from tokenizing through evaluation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Typechecker(#[from] TypecheckerError),
    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
}

impl Error {
    pub fn get_position(&self) -> Option<&Position> {
        match self {
            Error::Tokenizer(error) | Error::Parser(ParserError::Tokenizer(error)) => {
                error.get_position()
            }
            Error::Parser(ParserError::UnexpectedToken { position, .. }) => Some(position),
            Error::Typechecker(TypecheckerError::UndeclaredVariable { position, .. })
            | Error::Typechecker(TypecheckerError::AlreadyDeclared { position, .. })
            | Error::Interpreter(InterpreterError::UndeclaredVariable { position, .. })
            | Error::Interpreter(InterpreterError::AlreadyDeclared { position, .. }) => {
                Some(position)
            }
            _ => None,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            Error::Tokenizer(error) | Error::Parser(ParserError::Tokenizer(error)) => {
                tokenizer_error_name(error)
            }
            Error::Parser(ParserError::UnexpectedToken { .. }) => "UnexpectedToken",
            Error::Typechecker(TypecheckerError::Mismatch { .. }) => "TypeMatchError",
            Error::Typechecker(TypecheckerError::UndeclaredVariable { .. })
            | Error::Interpreter(InterpreterError::UndeclaredVariable { .. }) => {
                "VariableNotDeclared"
            }
            Error::Typechecker(TypecheckerError::AlreadyDeclared { .. })
            | Error::Interpreter(InterpreterError::AlreadyDeclared { .. }) => {
                "VariableAlreadyDeclared"
            }
            Error::Interpreter(InterpreterError::Value(_)) => "ValueMatchError",
            Error::Interpreter(InterpreterError::Output(_)) => "OutputError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::Tokenizer(TokenizerError::NumberOutOfRange { text, .. })
            | Error::Parser(ParserError::Tokenizer(TokenizerError::NumberOutOfRange {
                text,
                ..
            })) => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                text
            )),
            Error::Tokenizer(TokenizerError::Scan(ScannerError::Malformed { text, .. }))
            | Error::Parser(ParserError::Tokenizer(TokenizerError::Scan(
                ScannerError::Malformed { text, .. },
            ))) => ErrorTip::Suggestion(format!("`{}` is not part of the language", text)),
            Error::Tokenizer(_) | Error::Parser(ParserError::Tokenizer(_)) => ErrorTip::None,
            Error::Parser(ParserError::UnexpectedToken {
                token, expected, ..
            }) => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            Error::Typechecker(TypecheckerError::Mismatch { expected, found }) => {
                ErrorTip::Suggestion(format!(
                    "Expected type `{}`, received `{}`",
                    expected, found
                ))
            }
            Error::Typechecker(TypecheckerError::UndeclaredVariable { name, .. })
            | Error::Interpreter(InterpreterError::UndeclaredVariable { name, .. }) => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", name))
            }
            Error::Typechecker(TypecheckerError::AlreadyDeclared { name, .. })
            | Error::Interpreter(InterpreterError::AlreadyDeclared { name, .. }) => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", name))
            }
            Error::Interpreter(InterpreterError::Value(error)) => {
                ErrorTip::Suggestion(error.to_string())
            }
            Error::Interpreter(InterpreterError::Output(_)) => ErrorTip::None,
        }
    }
}

fn tokenizer_error_name(error: &TokenizerError) -> &'static str {
    match error {
        TokenizerError::Scan(ScannerError::Malformed { .. }) => "UnrecognisedToken",
        TokenizerError::Scan(ScannerError::Io { .. }) => "InputError",
        TokenizerError::Scan(ScannerError::Exhausted) | TokenizerError::PastEnd => "PastEnd",
        TokenizerError::NumberOutOfRange { .. } => "NumberParseError",
        TokenizerError::NoCurrentToken | TokenizerError::WrongTokenKind { .. } => "TokenUsage",
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
