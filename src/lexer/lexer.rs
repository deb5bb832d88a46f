use std::{collections::HashMap, io::BufRead};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::TokenizerError,
    Span, MK_TOKEN,
};

use super::{
    scanner::{compose_pattern, LexCategory, PatternIndex, Scanner},
    tokens::{Literal, Token, TokenKind, KEYWORD_LOOKUP, SYMBOL_LOOKUP},
};

lazy_static! {
    pub static ref LEXICON: Lexicon = Lexicon::new(&KEYWORD_LOOKUP, &SYMBOL_LOOKUP);
}

/// The read-only tables a tokenizer classifies matches with.
/// One instance can back any number of tokenizers.
pub struct Lexicon {
    regex: Regex,
    index: PatternIndex,
    keywords: HashMap<&'static str, TokenKind>,
    symbols: HashMap<&'static str, TokenKind>,
}

impl Lexicon {
    pub fn new(
        keywords: &HashMap<&'static str, TokenKind>,
        symbols: &HashMap<&'static str, TokenKind>,
    ) -> Self {
        let pattern = compose_pattern(symbols.keys().copied());
        let regex = Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("invalid lexical pattern {:?}: {}", pattern, error));
        let index = PatternIndex::new(&regex);

        Lexicon {
            regex,
            index,
            keywords: keywords.clone(),
            symbols: symbols.clone(),
        }
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn index(&self) -> &PatternIndex {
        &self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenizerState {
    Ready,
    Exhausted,
}

/// A cursor over the tokens of a character source.
///
/// Only the current token is kept; every `advance` replaces it. Whitespace and
/// comments are dropped, and the stream always ends with exactly one EOF token.
pub struct Tokenizer<'a, R> {
    scanner: Scanner<'a, R>,
    lexicon: &'a Lexicon,
    state: TokenizerState,
    current: Option<Token>,
}

impl<R: BufRead> Tokenizer<'static, R> {
    pub fn new(source: R) -> Self {
        Tokenizer::with_lexicon(source, &LEXICON)
    }
}

impl<'a, R: BufRead> Tokenizer<'a, R> {
    pub fn with_lexicon(source: R, lexicon: &'a Lexicon) -> Self {
        Tokenizer {
            scanner: Scanner::new(lexicon.regex(), source),
            lexicon,
            state: TokenizerState::Ready,
            current: None,
        }
    }

    /// True until the EOF token has been produced.
    pub fn has_next(&self) -> bool {
        self.state == TokenizerState::Ready
    }

    /// Moves to the next significant token and returns its kind.
    ///
    /// A fatal scan failure closes the source and ends the stream; a malformed
    /// character only fails this call.
    pub fn advance(&mut self) -> Result<TokenKind, TokenizerError> {
        if self.state == TokenizerState::Exhausted {
            return Err(TokenizerError::PastEnd);
        }

        loop {
            self.current = None;

            let scanned = match self.scanner.has_next() {
                Ok(true) => self.scanner.next().map(|_| true),
                other => other,
            };

            match scanned {
                Ok(true) => {}
                Ok(false) => {
                    self.state = TokenizerState::Exhausted;
                    let span = self.scanner.span();
                    let eof = Span {
                        start: span.end,
                        end: span.end,
                    };
                    self.current = Some(MK_TOKEN!(TokenKind::EOF, String::new(), eof, Literal::None));
                    debug!("reached end of input");
                    return Ok(TokenKind::EOF);
                }
                Err(error) => {
                    if error.is_fatal() {
                        self.fail();
                    }
                    return Err(error.into());
                }
            }

            if let Some(token) = self.classify()? {
                debug!("token {} at {}", token, token.span.start);
                let kind = token.kind;
                self.current = Some(token);
                return Ok(kind);
            }
        }
    }

    /// Turns the scanner's last match into a token, or `None` for whitespace
    /// and comments.
    fn classify(&self) -> Result<Option<Token>, TokenizerError> {
        let text = self.scanner.group();
        let span = self.scanner.span();

        match self.lexicon.index().classify(&self.scanner) {
            Some(LexCategory::Identifier) => {
                let token = match self.lexicon.keywords.get(text) {
                    Some(TokenKind::Bool) => {
                        MK_TOKEN!(TokenKind::Bool, String::from(text), span, Literal::Bool(text == "true"))
                    }
                    Some(kind) => MK_TOKEN!(*kind, String::from(text), span, Literal::None),
                    None => MK_TOKEN!(TokenKind::Ident, String::from(text), span, Literal::None),
                };
                Ok(Some(token))
            }
            Some(LexCategory::Number) => {
                let value = decode_number(text).ok_or_else(|| TokenizerError::NumberOutOfRange {
                    text: String::from(text),
                    position: span.start,
                })?;
                Ok(Some(MK_TOKEN!(TokenKind::Num, String::from(text), span, Literal::Int(value))))
            }
            Some(LexCategory::Skip) => Ok(None),
            None => match self.lexicon.symbols.get(text) {
                Some(kind) => Ok(Some(MK_TOKEN!(*kind, String::from(text), span, Literal::None))),
                None => panic!("matched symbol {:?} has no token kind", text),
            },
        }
    }

    fn fail(&mut self) {
        self.scanner.close();
        self.state = TokenizerState::Exhausted;
    }

    pub fn token(&self) -> Result<&Token, TokenizerError> {
        self.current.as_ref().ok_or(TokenizerError::NoCurrentToken)
    }

    pub fn token_kind(&self) -> Result<TokenKind, TokenizerError> {
        Ok(self.token()?.kind)
    }

    pub fn token_string(&self) -> Result<&str, TokenizerError> {
        Ok(&self.token()?.value)
    }

    pub fn int_value(&self) -> Result<i64, TokenizerError> {
        self.token()?.int_value()
    }

    pub fn bool_value(&self) -> Result<bool, TokenizerError> {
        self.token()?.bool_value()
    }

    pub fn opt_value(&self) -> Result<Literal, TokenizerError> {
        self.token()?.opt_value()
    }

    /// Releases the character source. Safe to call more than once.
    pub fn close(&mut self) {
        self.scanner.close();
    }
}

impl<R: BufRead> Iterator for Tokenizer<'_, R> {
    type Item = Result<Token, TokenizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }

        Some(self.advance().and_then(|_| self.token().cloned()))
    }
}

/// Decodes a numeric lexeme: `0b`/`0B` prefixed text as base 2, anything else
/// as base 10. `None` means the value does not fit in an `i64`.
fn decode_number(text: &str) -> Option<i64> {
    let (digits, radix) = match text.as_bytes() {
        [_, b'b' | b'B', ..] => (&text[2..], 2),
        _ => (text, 10),
    };

    match i64::from_str_radix(digits, radix) {
        Ok(value) => Some(value),
        Err(error) => match error.kind() {
            std::num::IntErrorKind::PosOverflow => None,
            _ => unreachable!("numeric lexeme {:?} is not a valid literal: {}", text, error),
        },
    }
}

/// Collects every token of an in-memory source, ending with EOF.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizerError> {
    let mut tokenizer = Tokenizer::new(source.as_bytes());
    let tokens = tokenizer.by_ref().collect::<Result<Vec<Token>, TokenizerError>>();
    tokenizer.close();
    tokens
}
