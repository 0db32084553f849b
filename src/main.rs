use std::io::{self, BufRead, Write};

use clap::{Parser as _, ValueEnum};
use log::{trace, LevelFilter};
use pratt::{errors::errors::{Error, ErrorTip}, lexer::tokens::TokenKind, parse, Lexer};

const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Print every token of each line
    Tokens,
    /// Parse each line and print the rendered program
    Ast,
}

#[derive(Debug, clap::Parser)]
struct App {
    #[clap(long, value_enum, default_value_t = Mode::Ast)]
    mode: Mode,
    #[clap(long = "log-level", env = "RUST_LOG")]
    log: Option<LevelFilter>,
}

fn main() -> io::Result<()> {
    let app = App::parse();
    env_logger::Builder::new()
        .filter_level(app.log.unwrap_or(LevelFilter::Warn))
        .init();
    trace!("starting repl with args {app:?}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;

        match app.mode {
            Mode::Tokens => print_tokens(&line),
            Mode::Ast => print_program(&line),
        }
    }
}

fn print_tokens(line: &str) {
    let mut lexer = Lexer::new(line);
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            break;
        }
        token.debug();
    }
}

fn print_program(line: &str) {
    let (parser, program) = parse(line);

    if parser.diagnostics().is_empty() {
        println!("{}", program);
    } else {
        for error in parser.diagnostics() {
            display_error(error);
        }
    }
}

fn display_error(error: &Error) {
    /*
        Error: UnexpectedToken: expected next token to be IDENT, got =
          | `let` must be followed by a name
    */
    println!("Error: {}: {}", error.get_error_name(), error);
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        println!("  | {}", tip);
    }
}
