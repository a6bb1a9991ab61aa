//! Command language for driving a lab session.
//!
//! Line-oriented, one command per line, as typed at the console or stored in
//! a script file.
//!
//! # Grammar Overview
//!
//! ```text
//! script   = { line }
//! line     = [ command ] [ comment ] newline
//! comment  = ('#' | ';') { any_char }
//! command  = "measure" [ bias ] volts
//!          | "table"
//!          | "plot" [ path ]
//!          | "reset" | "help" | "quit"
//! bias     = "forward" | "fwd" | "f" | "reverse" | "rev" | "r"
//! volts    = number [ 'V' | 'v' ]
//! path     = word | '"' { any_char } '"'
//! ```
//!
//! # Example
//!
//! ```text
//! # Forward and reverse sweep
//! measure forward 0.2
//! measure forward 0.4
//! measure reverse 1.0
//! table
//! plot iv_curve.svg
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::{Command, CommandLine, HELP_TEXT};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a command script into commands.
pub fn parse(input: &str) -> Result<Vec<CommandLine>> {
    Parser::new(Lexer::new(input))?.parse()
}

/// Parse a single console line; blank and comment-only lines yield `None`.
pub fn parse_line(input: &str, line: usize) -> Result<Option<CommandLine>> {
    let mut commands = Parser::new(Lexer::starting_at(input, line))?.parse()?;
    if commands.len() > 1 {
        return Err(crate::error::LabError::parse(
            line,
            "one command per line",
        ));
    }
    Ok(commands.pop())
}

/// Parse a command script file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Vec<CommandLine>> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::LabError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
