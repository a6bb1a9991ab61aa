//! Parser for lab command scripts.

use super::ast::{Command, CommandLine};
use super::lexer::{Lexer, Token, TokenKind};
use crate::components::Bias;
use crate::error::{LabError, Result};

/// Parser for command scripts.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse every command in the input.
    pub fn parse(&mut self) -> Result<Vec<CommandLine>> {
        let mut commands = Vec::new();

        while self.current.kind != TokenKind::Eof {
            // Skip empty lines
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
                continue;
            }

            commands.push(self.parse_command()?);

            match self.current.kind {
                TokenKind::Newline => self.advance()?,
                TokenKind::Eof => break,
                _ => {
                    return Err(LabError::parse(
                        self.current.line,
                        format!("unexpected argument '{}'", self.current.text),
                    ));
                }
            }
        }

        Ok(commands)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn at_line_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Newline | TokenKind::Eof)
    }

    fn parse_command(&mut self) -> Result<CommandLine> {
        let line = self.current.line;
        if self.current.kind != TokenKind::Word {
            return Err(LabError::parse(
                line,
                format!("expected a command, got '{}'", self.current.text),
            ));
        }
        let name = self.current.text.to_ascii_lowercase();
        self.advance()?;

        let command = match name.as_str() {
            "measure" | "m" => self.parse_measure(line)?,
            "table" | "t" => Command::Table,
            "plot" | "p" => {
                let path = if self.at_line_end() {
                    None
                } else {
                    let tok = self.current.clone();
                    self.advance()?;
                    Some(tok.text)
                };
                Command::Plot { path }
            }
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => {
                return Err(LabError::UnknownCommand {
                    command: name,
                    line,
                })
            }
        };

        Ok(CommandLine { command, line })
    }

    /// `measure <bias> <volts>`; the bias may be omitted and defaults to Forward.
    fn parse_measure(&mut self, line: usize) -> Result<Command> {
        let bias = if self.current.kind == TokenKind::Word {
            let bias = self
                .current
                .text
                .parse::<Bias>()
                .map_err(|msg| LabError::parse(line, msg))?;
            self.advance()?;
            bias
        } else {
            Bias::default()
        };

        if self.current.kind != TokenKind::Number {
            return Err(LabError::parse(line, "measure requires a voltage"));
        }
        let magnitude = self
            .current
            .text
            .parse::<f64>()
            .map_err(|e| LabError::parse(line, format!("invalid voltage: {}", e)))?;
        self.advance()?;

        Ok(Command::Measure { bias, magnitude })
    }
}

#[cfg(test)]
mod tests {
    use super::super::{parse, parse_line};
    use super::*;

    #[test]
    fn test_parse_measure() {
        let cmds = parse("measure reverse 2.5").unwrap();
        assert_eq!(
            cmds,
            vec![CommandLine {
                command: Command::Measure {
                    bias: Bias::Reverse,
                    magnitude: 2.5
                },
                line: 1
            }]
        );
    }

    #[test]
    fn test_parse_measure_default_bias() {
        let cmds = parse("m 0.7V").unwrap();
        assert_eq!(
            cmds[0].command,
            Command::Measure {
                bias: Bias::Forward,
                magnitude: 0.7
            }
        );
    }

    #[test]
    fn test_parse_script_with_comments() {
        let input = "# forward sweep\nmeasure forward 0.1\n\nmeasure f 0.2 ; second\nplot out.svg\ntable\nreset\nquit\n";
        let cmds = parse(input).unwrap();
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds[1].line, 4);
        assert_eq!(
            cmds[2].command,
            Command::Plot {
                path: Some("out.svg".to_string())
            }
        );
        assert_eq!(cmds[5].command, Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("measure sideways 1.0"),
            Err(LabError::ParseError { line: 1, .. })
        ));
        assert!(matches!(
            parse("table\nmeasure forward"),
            Err(LabError::ParseError { line: 2, .. })
        ));
        assert!(matches!(
            parse("calibrate"),
            Err(LabError::UnknownCommand { .. })
        ));
        assert!(matches!(
            parse("reset now"),
            Err(LabError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parse_line_numbering() {
        assert_eq!(parse_line("   ", 4).unwrap(), None);
        let cmd = parse_line("plot", 7).unwrap().unwrap();
        assert_eq!(cmd.line, 7);
        assert_eq!(cmd.command, Command::Plot { path: None });
        assert!(parse_line("measure forward 1 2", 3).is_err());
    }
}
