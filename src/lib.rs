#![allow(clippy::module_inception)]

use std::{
    fmt::Display,
    fs,
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::Evaluator,
    lexer::lexer::Tokenizer,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

pub mod ast;
pub mod environment;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// A 1-based line and column (counted in characters) in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes, parses, optionally type checks, then evaluates a program,
/// writing everything it prints to `out`.
pub fn run<R: BufRead, W: Write>(source: R, out: W, typecheck: bool) -> Result<(), Error> {
    let mut tokenizer = Tokenizer::new(source);
    let prog = parse(&mut tokenizer);
    tokenizer.close();
    let prog = prog?;

    if typecheck {
        type_check(&prog)?;
    }

    let mut evaluator = Evaluator::new(out);
    prog.accept(&mut evaluator)?;
    Ok(())
}

/// Returns the text of the given 1-based line, if the file has one.
pub fn get_line_at_position(file: &Path, line: u32) -> Option<String> {
    let content = fs::read_to_string(file).ok()?;
    content
        .lines()
        .nth((line as usize).checked_sub(1)?)
        .map(String::from)
}

pub fn display_error(error: &Error, file: Option<&Path>) {
    /*
        Error: name (tip)
        -> prog.txt:20:9
           |
        20 | var a = @;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let file_name = file
        .map(|file| file.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("<stdin>"));

    let Some(position) = error.get_position() else {
        eprintln!("-> {}", file_name);
        return;
    };
    eprintln!("-> {}:{}", file_name, position);

    let Some(line_text) = file.and_then(|file| get_line_at_position(file, position.line)) else {
        return;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (String::from(&string[start..]), start)
}
