use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use listlang::{display_error, errors::errors::Error, lexer::lexer::Tokenizer, run};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// listlang runs small programs over integers, booleans and lists.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run. Reads standard input when omitted.
    file: Option<PathBuf>,

    /// Print each token instead of running the program.
    #[arg(long)]
    tokens: bool,

    /// Skip type checking and only fail on errors found while running.
    #[arg(long)]
    no_typecheck: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let source: Box<dyn BufRead> = match &args.file {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(error) => {
                eprintln!(
                    "Failed to read the input file '{}': {}",
                    path.display(),
                    error
                );
                return ExitCode::FAILURE;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    if args.tokens {
        return dump_tokens(source, &args);
    }

    info!(file = ?args.file, typecheck = !args.no_typecheck, "running program");
    match run(source, io::stdout().lock(), !args.no_typecheck) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error, args.file.as_deref());
            ExitCode::FAILURE
        }
    }
}

/// Prints every token as `"<text>" of kind <Kind>`, reporting malformed input
/// as it goes. Only a failure that ends the stream stops the dump early.
fn dump_tokens(source: Box<dyn BufRead>, args: &Args) -> ExitCode {
    let mut tokenizer = Tokenizer::new(source);
    let mut status = ExitCode::SUCCESS;

    while tokenizer.has_next() {
        match tokenizer.advance() {
            Ok(kind) => match tokenizer.token_string() {
                Ok(text) => println!("\"{}\" of kind {}", text, kind),
                Err(error) => {
                    display_error(&Error::from(error), args.file.as_deref());
                    status = ExitCode::FAILURE;
                    break;
                }
            },
            Err(error) => {
                let fatal = error.is_fatal();
                warn!(fatal, "{}", error);
                display_error(&Error::from(error), args.file.as_deref());
                if fatal {
                    status = ExitCode::FAILURE;
                    break;
                }
            }
        }
    }

    tokenizer.close();
    status
}
