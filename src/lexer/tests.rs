//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, boolean literals and identifiers
//! - Decimal and binary integer literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - The cursor protocol and error cases

use std::io::{self, BufReader, Read};

use regex::Regex;

use crate::{
    errors::errors::{ScannerError, TokenizerError},
    Position,
};

use super::{
    lexer::{tokenize, Lexicon, Tokenizer, LEXICON},
    scanner::{compose_pattern, LexCategory, PatternIndex, Scanner},
    tokens::{Literal, TokenKind, KEYWORD_LOOKUP, SYMBOL_LOOKUP},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

/// A reader that fails on every read.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("for print var if else do while opt get empty def"),
        vec![
            TokenKind::For,
            TokenKind::Print,
            TokenKind::Var,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Do,
            TokenKind::While,
            TokenKind::Opt,
            TokenKind::Get,
            TokenKind::Empty,
            TokenKind::Def,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar2 CamelCase truex Print").unwrap();

    for (token, text) in tokens.iter().zip(["foo", "bar2", "CamelCase", "truex", "Print"]) {
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.value, text);
    }
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_booleans() {
    let tokens = tokenize("true false").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Bool);
    assert_eq!(tokens[0].bool_value().unwrap(), true);
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].bool_value().unwrap(), false);
}

#[test]
fn test_tokenize_decimal_numbers() {
    let tokens = tokenize("0 7 42 1234567890").unwrap();

    let values: Vec<i64> = tokens[..4].iter().map(|token| token.int_value().unwrap()).collect();
    assert_eq!(values, vec![0, 7, 42, 1234567890]);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_decimal_numbers_round_trip() {
    for value in [0i64, 1, 9, 10, 99, 1000, 65535, 2147483647, i64::MAX] {
        let tokens = tokenize(&value.to_string()).unwrap();
        assert_eq!(tokens[0].int_value().unwrap(), value);
    }
}

#[test]
fn test_tokenize_binary_numbers() {
    let tokens = tokenize("0b1011 0B1011 0b0 0b101").unwrap();

    assert_eq!(tokens[0].int_value().unwrap(), 11);
    assert_eq!(tokens[0].value, "0b1011");
    assert_eq!(tokens[1].int_value().unwrap(), 11);
    assert_eq!(tokens[2].int_value().unwrap(), 0);
    assert_eq!(tokens[3].int_value().unwrap(), 5);
}

#[test]
fn test_leading_zero_splits_number() {
    let tokens = tokenize("012").unwrap();

    assert_eq!(tokens[0].int_value().unwrap(), 0);
    assert_eq!(tokens[1].int_value().unwrap(), 12);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_binary_prefix_without_digits() {
    let tokens = tokenize("0b").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Num);
    assert_eq!(tokens[0].int_value().unwrap(), 0);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].value, "b");
}

#[test]
fn test_number_out_of_range() {
    let result = tokenize("99999999999999999999");

    match result {
        Err(TokenizerError::NumberOutOfRange { text, position }) => {
            assert_eq!(text, "99999999999999999999");
            assert_eq!(position.line, 1);
            assert_eq!(position.column, 1);
        }
        other => panic!("expected NumberOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_tokenize_symbols() {
    assert_eq!(
        kinds("+ - * = == :: : ( ) ; , { } [ ] && !"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Times,
            TokenKind::Assign,
            TokenKind::Eq,
            TokenKind::Prefix,
            TokenKind::In,
            TokenKind::OpenPar,
            TokenKind::ClosePar,
            TokenKind::StmtSep,
            TokenKind::ExpSep,
            TokenKind::OpenBlock,
            TokenKind::CloseBlock,
            TokenKind::OpenList,
            TokenKind::CloseList,
            TokenKind::And,
            TokenKind::Not,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_longest_symbol_wins() {
    assert_eq!(
        kinds("===:::"),
        vec![
            TokenKind::Eq,
            TokenKind::Assign,
            TokenKind::Prefix,
            TokenKind::In,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("var x = 0b101 + 3; print x;").unwrap();

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Num,
            TokenKind::Plus,
            TokenKind::Num,
            TokenKind::StmtSep,
            TokenKind::Print,
            TokenKind::Ident,
            TokenKind::StmtSep,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "x");
    assert_eq!(tokens[3].int_value().unwrap(), 5);
    assert_eq!(tokens[5].int_value().unwrap(), 3);
    assert_eq!(tokens[8].value, "x");
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("var x = 5 // this is a comment\nprint x").unwrap();

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Num,
            TokenKind::Print,
            TokenKind::Ident,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_only_comment_yields_eof() {
    assert_eq!(kinds("// comment\n"), vec![TokenKind::EOF]);
}

#[test]
fn test_only_whitespace_yields_eof() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \t \n\n  \r\n"), vec![TokenKind::EOF]);
    assert_eq!(kinds("  // one\n// two\n\t"), vec![TokenKind::EOF]);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("var x\n  print 10").unwrap();

    assert_eq!((tokens[0].span.start.line, tokens[0].span.start.column), (1, 1));
    assert_eq!((tokens[0].span.end.line, tokens[0].span.end.column), (1, 4));
    assert_eq!((tokens[1].span.start.line, tokens[1].span.start.column), (1, 5));
    assert_eq!((tokens[2].span.start.line, tokens[2].span.start.column), (2, 3));
    assert_eq!((tokens[3].span.start.line, tokens[3].span.start.column), (2, 9));
}

#[test]
fn test_unrecognized_character() {
    let result = tokenize("var x = @");

    match result {
        Err(TokenizerError::Scan(ScannerError::Malformed { text, position })) => {
            assert_eq!(text, "@");
            assert_eq!(position.column, 9);
        }
        other => panic!("expected a malformed scan failure, got {:?}", other),
    }
}

#[test]
fn test_malformed_character_is_recoverable() {
    let mut tokenizer = Tokenizer::new("x @ y".as_bytes());

    assert_eq!(tokenizer.advance().unwrap(), TokenKind::Ident);
    let error = tokenizer.advance().unwrap_err();
    assert!(!error.is_fatal());
    assert!(tokenizer.token().is_err());
    assert!(tokenizer.has_next());

    assert_eq!(tokenizer.advance().unwrap(), TokenKind::Ident);
    assert_eq!(tokenizer.token_string().unwrap(), "y");
    assert_eq!(tokenizer.advance().unwrap(), TokenKind::EOF);
}

#[test]
fn test_io_failure_is_fatal_and_keeps_cause() {
    let mut tokenizer = Tokenizer::new(BufReader::new(BrokenReader));

    let error = tokenizer.advance().unwrap_err();
    assert!(error.is_fatal());
    assert!(matches!(error, TokenizerError::Scan(ScannerError::Io { .. })));

    let cause = std::error::Error::source(&error).unwrap();
    assert!(cause.to_string().contains("failed to read input"));
    let io_cause = std::error::Error::source(cause).unwrap();
    assert_eq!(io_cause.to_string(), "disk on fire");

    assert!(!tokenizer.has_next());
    assert!(matches!(tokenizer.advance(), Err(TokenizerError::PastEnd)));
}

#[test]
fn test_has_next_until_eof_consumed() {
    let mut tokenizer = Tokenizer::new("x".as_bytes());

    assert!(tokenizer.has_next());
    assert_eq!(tokenizer.advance().unwrap(), TokenKind::Ident);
    assert!(tokenizer.has_next());
    assert_eq!(tokenizer.advance().unwrap(), TokenKind::EOF);
    assert!(!tokenizer.has_next());
    assert!(matches!(tokenizer.advance(), Err(TokenizerError::PastEnd)));
    assert!(!tokenizer.has_next());
}

#[test]
fn test_usage_errors() {
    let mut tokenizer = Tokenizer::new("x 4".as_bytes());

    assert!(matches!(tokenizer.token(), Err(TokenizerError::NoCurrentToken)));
    assert!(matches!(tokenizer.token_kind(), Err(TokenizerError::NoCurrentToken)));

    tokenizer.advance().unwrap();
    assert!(matches!(
        tokenizer.int_value(),
        Err(TokenizerError::WrongTokenKind {
            expected: TokenKind::Num,
            found: TokenKind::Ident
        })
    ));
    assert!(matches!(
        tokenizer.bool_value(),
        Err(TokenizerError::WrongTokenKind {
            expected: TokenKind::Bool,
            found: TokenKind::Ident
        })
    ));

    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.int_value().unwrap(), 4);
    assert!(tokenizer.bool_value().is_err());
    assert!(matches!(
        tokenizer.opt_value(),
        Err(TokenizerError::WrongTokenKind {
            expected: TokenKind::Opt,
            found: TokenKind::Num
        })
    ));

    let mut tokenizer = Tokenizer::new("opt".as_bytes());
    assert!(matches!(tokenizer.opt_value(), Err(TokenizerError::NoCurrentToken)));

    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.opt_value().unwrap(), Literal::None);
    assert!(tokenizer.int_value().is_err());
}

#[test]
fn test_long_single_line() {
    let tokens = tokenize(&"x ".repeat(50_000)).unwrap();

    assert_eq!(tokens.len(), 50_001);
    let last = &tokens[49_999];
    assert_eq!(last.kind, TokenKind::Ident);
    assert_eq!(last.span.start, Position::new(1, 99_999));
    assert_eq!(last.span.end, Position::new(1, 100_000));
    assert_eq!(tokens[50_000].kind, TokenKind::EOF);
}

#[test]
fn test_columns_count_characters() {
    let error = tokenize("// é\nx\n  é").unwrap_err();

    assert!(matches!(
        error,
        TokenizerError::Scan(ScannerError::Malformed { ref text, position })
            if text == "é" && position == Position::new(3, 3)
    ));
}

#[test]
fn test_only_ascii_whitespace_is_skipped() {
    let result = tokenize("x\u{00A0}y");

    assert!(matches!(
        result,
        Err(TokenizerError::Scan(ScannerError::Malformed { ref text, position }))
            if text == "\u{00A0}" && position == Position::new(1, 2)
    ));
    assert_eq!(kinds("x\t\x0Cy\r\n"), vec![TokenKind::Ident, TokenKind::Ident, TokenKind::EOF]);
}

#[test]
fn test_close_is_idempotent() {
    let mut tokenizer = Tokenizer::new("print 1".as_bytes());

    assert_eq!(tokenizer.advance().unwrap(), TokenKind::Print);
    tokenizer.close();
    tokenizer.close();

    // Whatever was already buffered from the closed source is discarded.
    assert_eq!(tokenizer.advance().unwrap(), TokenKind::EOF);
    tokenizer.close();
}

#[test]
fn test_tokenizer_iterator() {
    let tokens: Vec<_> = Tokenizer::new("[1, 2]".as_bytes())
        .map(|token| token.unwrap().kind)
        .collect();

    assert_eq!(
        tokens,
        vec![
            TokenKind::OpenList,
            TokenKind::Num,
            TokenKind::ExpSep,
            TokenKind::Num,
            TokenKind::CloseList,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "for x : [1] {{\n  print x\n}}\n").unwrap();

    let reader = BufReader::new(std::fs::File::open(file.path()).unwrap());
    let tokens: Vec<_> = Tokenizer::new(reader).map(|token| token.unwrap()).collect();

    assert_eq!(tokens.len(), 11);
    assert_eq!(tokens[0].kind, TokenKind::For);
    assert_eq!(tokens[7].kind, TokenKind::Print);
    assert_eq!(tokens[7].span.start.line, 2);
    assert_eq!(tokens[9].kind, TokenKind::CloseBlock);
    assert_eq!(tokens[9].span.start.line, 3);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_shared_lexicon() {
    let lexicon = Lexicon::new(&KEYWORD_LOOKUP, &SYMBOL_LOOKUP);
    let mut first = Tokenizer::with_lexicon("var".as_bytes(), &lexicon);
    let mut second = Tokenizer::with_lexicon("print".as_bytes(), &lexicon);

    assert_eq!(first.advance().unwrap(), TokenKind::Var);
    assert_eq!(second.advance().unwrap(), TokenKind::Print);
}

#[test]
fn test_pattern_index_groups() {
    let index = LEXICON.index();

    assert_eq!(index.group(LexCategory::Identifier), 1);
    assert_eq!(index.group(LexCategory::Number), 2);
    assert_eq!(index.group(LexCategory::Skip), 3);
}

#[test]
fn test_pattern_index_resolves_groups_by_name() {
    // Alternatives in the reverse of the category declaration order
    let regex = Regex::new(r"^(?:(?P<skip>\s+)|(?P<num>[0-9]+)|(?P<ident>[a-z]+))").unwrap();
    let index = PatternIndex::new(&regex);

    assert_eq!(index.group(LexCategory::Skip), 1);
    assert_eq!(index.group(LexCategory::Number), 2);
    assert_eq!(index.group(LexCategory::Identifier), 3);

    let mut scanner = Scanner::new(&regex, "abc 42".as_bytes());
    scanner.next().unwrap();
    assert_eq!(index.classify(&scanner), Some(LexCategory::Identifier));
    scanner.next().unwrap();
    assert_eq!(index.classify(&scanner), Some(LexCategory::Skip));
    scanner.next().unwrap();
    assert_eq!(index.classify(&scanner), Some(LexCategory::Number));
    scanner.close();
}

#[test]
#[should_panic(expected = "no `skip` group")]
fn test_pattern_index_rejects_missing_group() {
    let regex = Regex::new("^(?:(?P<ident>[a-z]+)|(?P<num>[0-9]+))").unwrap();
    PatternIndex::new(&regex);
}

#[test]
fn test_compose_pattern_orders_symbols() {
    let pattern = compose_pattern([":", "::", "+"]);

    assert!(pattern.starts_with("^(?:(?P<ident>"));
    assert!(pattern.ends_with(r"|::|\+|:)"));
}

#[test]
fn test_scanner_groups() {
    let regex = LEXICON.regex();
    let index = LEXICON.index();
    let mut scanner = Scanner::new(regex, "abc 0b11 ==".as_bytes());

    scanner.next().unwrap();
    assert_eq!(scanner.group(), "abc");
    assert_eq!(scanner.group_at(index.group(LexCategory::Identifier)), Some("abc"));
    assert_eq!(scanner.group_at(index.group(LexCategory::Number)), None);
    assert_eq!(index.classify(&scanner), Some(LexCategory::Identifier));

    scanner.next().unwrap();
    assert_eq!(index.classify(&scanner), Some(LexCategory::Skip));

    scanner.next().unwrap();
    assert_eq!(scanner.group_at(index.group(LexCategory::Number)), Some("0b11"));
    assert_eq!(index.classify(&scanner), Some(LexCategory::Number));

    scanner.next().unwrap();
    scanner.next().unwrap();
    assert_eq!(scanner.group(), "==");
    assert_eq!(index.classify(&scanner), None);

    assert!(!scanner.has_next().unwrap());
    assert!(matches!(scanner.next(), Err(ScannerError::Exhausted)));
}

#[test]
fn test_scanner_close() {
    let mut scanner = Scanner::new(LEXICON.regex(), "a\nb\n".as_bytes());

    assert!(scanner.has_next().unwrap());
    assert!(!scanner.is_closed());
    scanner.close();
    assert!(scanner.is_closed());
    assert!(!scanner.has_next().unwrap());
    scanner.close();
}

#[test]
fn test_scanner_reads_line_by_line() {
    let source = BufReader::new("a\nb".as_bytes());
    let mut scanner = Scanner::new(LEXICON.regex(), source);
    let mut matched = vec![];

    while scanner.has_next().unwrap() {
        scanner.next().unwrap();
        matched.push((scanner.group().to_string(), scanner.span().start.line));
    }

    assert_eq!(
        matched,
        vec![
            (String::from("a"), 1),
            (String::from("\n"), 1),
            (String::from("b"), 2),
        ]
    );
}
