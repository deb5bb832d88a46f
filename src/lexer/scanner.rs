//! Anchored regex matching over a line-buffered character source.

use std::io::BufRead;

use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::ScannerError, Position, Span};

/// The lexeme categories that have their own named group in the composed pattern.
/// Any match outside these groups is a literal symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexCategory {
    Identifier,
    Number,
    Skip,
}

impl LexCategory {
    /// Classification order: the first category whose group fired wins.
    pub const ALL: [LexCategory; 3] = [
        LexCategory::Identifier,
        LexCategory::Number,
        LexCategory::Skip,
    ];

    pub fn group_name(self) -> &'static str {
        match self {
            LexCategory::Identifier => "ident",
            LexCategory::Number => "num",
            LexCategory::Skip => "skip",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            LexCategory::Identifier => "[a-zA-Z][a-zA-Z0-9]*",
            LexCategory::Number => "[1-9][0-9]*|0[bB][01]+|0",
            LexCategory::Skip => r"(?-u:\s)+|//.*",
        }
    }
}

/// Maps each category to the index of its capture group in a composed pattern.
/// Groups are looked up by name, so neither the order of the alternatives in
/// the pattern nor the order of `LexCategory::ALL` affects the mapping.
#[derive(Debug, Clone)]
pub struct PatternIndex {
    ident: usize,
    num: usize,
    skip: usize,
}

impl PatternIndex {
    /// Resolves every category's group by name. Panics if the pattern lacks one,
    /// since that is a construction bug rather than bad input.
    pub fn new(regex: &Regex) -> Self {
        let resolve = |category: LexCategory| {
            regex
                .capture_names()
                .position(|name| name == Some(category.group_name()))
                .unwrap_or_else(|| {
                    panic!(
                        "pattern has no `{}` group for {:?}",
                        category.group_name(),
                        category
                    )
                })
        };

        PatternIndex {
            ident: resolve(LexCategory::Identifier),
            num: resolve(LexCategory::Number),
            skip: resolve(LexCategory::Skip),
        }
    }

    pub fn group(&self, category: LexCategory) -> usize {
        match category {
            LexCategory::Identifier => self.ident,
            LexCategory::Number => self.num,
            LexCategory::Skip => self.skip,
        }
    }

    /// The category of the scanner's last match, or `None` for a literal symbol.
    pub fn classify<R: BufRead>(&self, scanner: &Scanner<'_, R>) -> Option<LexCategory> {
        LexCategory::ALL
            .into_iter()
            .find(|category| scanner.group_at(self.group(*category)).is_some())
    }
}

/// Builds `^(?:(?P<ident>..)|(?P<num>..)|(?P<skip>..)|sym|sym..)`.
///
/// Symbols are tried longest first so that `==` wins over `=` and `::` over `:`.
pub fn compose_pattern<'s>(symbols: impl IntoIterator<Item = &'s str>) -> String {
    let mut symbols: Vec<&str> = symbols.into_iter().collect();
    symbols.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    let mut alternatives: Vec<String> = LexCategory::ALL
        .iter()
        .map(|category| format!("(?P<{}>{})", category.group_name(), category.pattern()))
        .collect();
    alternatives.extend(symbols.into_iter().map(regex::escape));

    format!("^(?:{})", alternatives.join("|"))
}

pub struct Scanner<'a, R> {
    regex: &'a Regex,
    source: Option<R>,
    buffer: String,
    pos: usize,
    line: u32,
    /// Column of `pos`, in characters.
    column: u32,
    groups: Vec<Option<String>>,
    span: Span,
}

impl<'a, R: BufRead> Scanner<'a, R> {
    pub fn new(regex: &'a Regex, source: R) -> Self {
        Scanner {
            regex,
            source: Some(source),
            buffer: String::new(),
            pos: 0,
            line: 0,
            column: 1,
            groups: vec![],
            span: Span {
                start: Position::null(),
                end: Position::null(),
            },
        }
    }

    /// Whether at least one more match can be attempted, reading the next line
    /// of the source if the current one is used up.
    pub fn has_next(&mut self) -> Result<bool, ScannerError> {
        while self.pos >= self.buffer.len() {
            let Some(source) = self.source.as_mut() else {
                return Ok(false);
            };

            self.buffer.clear();
            self.pos = 0;
            let read = source
                .read_line(&mut self.buffer)
                .map_err(|source| ScannerError::Io {
                    position: Position::new(self.line + 1, 1),
                    source,
                })?;

            if read == 0 {
                return Ok(false);
            }
            self.line += 1;
            self.column = 1;
        }

        Ok(true)
    }

    /// Matches the pattern at the current position and moves past the match.
    ///
    /// When nothing matches, the offending character is consumed before the
    /// error is returned so scanning can resume after it.
    pub fn next(&mut self) -> Result<(), ScannerError> {
        if !self.has_next()? {
            return Err(ScannerError::Exhausted);
        }

        let start = self.position();
        let rest = &self.buffer[self.pos..];

        match self.regex.captures(rest) {
            Some(captures) => {
                let (len, chars) = captures
                    .get(0)
                    .map_or((0, 0), |matched| (matched.end(), matched.as_str().chars().count()));
                self.groups = captures
                    .iter()
                    .map(|group| group.map(|matched| matched.as_str().to_string()))
                    .collect();
                self.pos += len;
                self.column += chars as u32;
            }
            None => {
                let Some(unmatched) = rest.chars().next() else {
                    return Err(ScannerError::Exhausted);
                };
                self.groups.clear();
                self.pos += unmatched.len_utf8();
                self.column += 1;
                return Err(ScannerError::Malformed {
                    text: unmatched.to_string(),
                    position: start,
                });
            }
        }

        self.span = Span {
            start,
            end: self.position(),
        };
        trace!("matched {:?} at {}", self.group(), start);
        Ok(())
    }

    /// The full text of the last match.
    pub fn group(&self) -> &str {
        self.group_at(0).unwrap_or("")
    }

    /// The text captured by group `n` in the last match, if that group fired.
    pub fn group_at(&self, n: usize) -> Option<&str> {
        self.groups.get(n).and_then(|group| group.as_deref())
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Releases the character source. Calling it again does nothing.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            debug!("closed character source after {} lines", self.line);
        }
        self.buffer.clear();
        self.pos = 0;
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}
