//! Lexer (tokenizer) for lab command scripts.

use crate::error::{LabError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (quotes stripped for strings)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in a command script.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A bare word (command name, bias, unquoted path)
    Word,
    /// A number (integer or floating point, optional trailing 'V')
    Number,
    /// A double-quoted string
    Str,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing command script input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self::starting_at(input, 1)
    }

    /// Create a lexer whose first line is numbered `line`.
    ///
    /// Used by the interactive console, which feeds one line at a time.
    pub fn starting_at(input: &'a str, line: usize) -> Self {
        Self {
            chars: input.chars().peekable(),
            line,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: self.line,
                    column: self.column,
                });
            }
        };

        let line = self.line;
        let column = self.column;

        let (kind, text) = match ch {
            '\n' => {
                self.advance();
                (TokenKind::Newline, "\n".to_string())
            }
            '"' => {
                self.advance();
                let mut text = String::new();
                loop {
                    match self.advance() {
                        Some('"') => break,
                        Some('\n') | None => {
                            return Err(LabError::lexer(line, column, "unterminated string"));
                        }
                        Some(c) => text.push(c),
                    }
                }
                (TokenKind::Str, text)
            }
            _ => {
                let text = self.read_word();
                if let Some(number) = strip_volt_suffix(&text).filter(|t| t.parse::<f64>().is_ok()) {
                    (TokenKind::Number, number.to_string())
                } else {
                    (TokenKind::Word, text)
                }
            }
        };

        Ok(Token {
            kind,
            text,
            line,
            column,
        })
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            match ch {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '#' | ';' => {
                    while let Some(&c) = self.chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() || matches!(ch, '#' | ';' | '"') {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }
}

/// Numbers may carry a unit: `0.7`, `0.7V`, `0.7v`.
fn strip_volt_suffix(text: &str) -> Option<&str> {
    let trimmed = text
        .strip_suffix('V')
        .or_else(|| text.strip_suffix('v'))
        .unwrap_or(text);
    // "inf"/"nan" parse as f64 but are words here
    if trimmed.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.')) {
        Some(trimmed)
    } else {
        None
    }
}
