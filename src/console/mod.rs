//! Interactive console front-end.
//!
//! Reads commands from stdin (or a pre-parsed script), dispatches them to a
//! [`Session`], and prints results. Every rejected action is reported and the
//! loop keeps going; only a failure to write output ends it.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{LabError, Result};
use crate::readings::PlotView;
use crate::render::{self, PlotConfig};
use crate::script::{self, Command, CommandLine, HELP_TEXT};
use crate::session::{Outcome, Session};

/// Prompt shown before each interactive command.
pub const PROMPT: &str = "pnlab> ";

/// Console driving one lab session.
pub struct Console<W: Write> {
    session: Session,
    plot_config: PlotConfig,
    plot_path: PathBuf,
    out: W,
}

impl<W: Write> Console<W> {
    /// Create a console writing to `out`.
    pub fn new(session: Session, out: W) -> Self {
        Self {
            session,
            plot_config: PlotConfig::default(),
            plot_path: PathBuf::from(render::DEFAULT_PLOT_PATH),
            out,
        }
    }

    /// Set the chart layout.
    pub fn with_plot_config(mut self, config: PlotConfig) -> Self {
        self.plot_config = config;
        self
    }

    /// Set the file plots are written to when a command names none.
    pub fn with_plot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plot_path = path.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the console, returning the session and writer.
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.out)
    }

    /// Run pre-parsed commands in order. Stops at `quit`.
    pub fn run_script(&mut self, commands: &[CommandLine]) -> Result<()> {
        for cmd in commands {
            if !self.handle(cmd.command.clone())? {
                break;
            }
        }
        Ok(())
    }

    /// Read and run commands line by line until EOF or `quit`.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than ending the
    /// session.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R, show_prompt: bool) -> Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            self.print_prompt(show_prompt)?;
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(()),
                Ok(_) => {}
                Err(e) => {
                    warn!("stopped reading input: {}", e);
                    return self.println(&format!("error: failed to read input: {}", e));
                }
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            match script::parse_line(&line, line_no) {
                Ok(Some(cmd)) => {
                    if !self.handle(cmd.command)? {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(err) => self.report(&err)?,
            }
        }
    }

    /// Dispatch one command and print its result.
    ///
    /// Returns `false` once the session should end.
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        let outcome = match self.session.execute(command) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.report(&err)?;
                return Ok(true);
            }
        };

        match outcome {
            Outcome::Measured(reading) => {
                self.println(&render::format_measurement(&reading))?;
            }
            Outcome::Warning(message) => {
                warn!("{}", message);
                self.println(&format!("warning: {}", message))?;
            }
            Outcome::Table(readings) => {
                self.println("Measured Values")?;
                self.print(&render::format_table(&readings))?;
            }
            Outcome::Plot { view, path } => {
                let path = path.map(PathBuf::from).unwrap_or_else(|| self.plot_path.clone());
                self.plot(&view, &path)?;
            }
            Outcome::Empty => {
                self.println("No readings yet. Take a measurement first.")?;
            }
            Outcome::Reset => {
                self.println("Experiment reset.")?;
            }
            Outcome::Help => {
                self.println(HELP_TEXT)?;
            }
            Outcome::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn plot(&mut self, view: &PlotView, path: &Path) -> Result<()> {
        match render::render_svg(view, &self.plot_config, path) {
            Ok(()) => {
                let note = if view.has_curve() {
                    ""
                } else {
                    " (need 2 distinct voltages for a curve)"
                };
                self.println(&format!(
                    "Plotted {} point(s) to {}{}",
                    view.points.len(),
                    path.display(),
                    note
                ))
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &LabError) -> Result<()> {
        if err.is_warning() {
            self.println(&format!("warning: {}", err))
        } else {
            self.println(&format!("error: {}", err))
        }
    }

    fn print_prompt(&mut self, show: bool) -> Result<()> {
        if show {
            self.print(PROMPT)?;
            self.out.flush().map_err(output_error)?;
        }
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).map_err(output_error)
    }

    fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).map_err(output_error)
    }
}

fn output_error(e: io::Error) -> LabError {
    LabError::OutputError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Session, String) {
        let mut console = Console::new(Session::new(), Vec::new());
        console.run_interactive(input.as_bytes(), false).unwrap();
        let (session, out) = console.into_parts();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_measure_and_table() {
        let (session, out) = run("measure forward 0.7\nmeasure reverse 1\ntable\n");
        assert_eq!(session.readings().len(), 2);
        assert!(out.contains("Measured Current: 3.98e+01 A at 0.70 V"));
        assert!(out.contains("Measured Current: -1.00e-02 A at -1.00 V"));
        assert!(out.contains("Measured Values"));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (session, out) = run("bogus\nmeasure forward 9\nmeasure forward 0.1\n");
        assert!(out.contains("error: Unknown command 'bogus' at line 1"));
        assert!(out.contains("error: Voltage 9 V is outside"));
        assert_eq!(session.readings().len(), 1);
    }

    #[test]
    fn test_capacity_warning() {
        let mut input = String::new();
        for i in 0..11 {
            input.push_str(&format!("measure forward {}\n", i as f64 * 0.1));
        }
        let (session, out) = run(&input);
        assert_eq!(session.readings().len(), 10);
        assert!(out.contains("warning: You can only take 10 readings."));
    }

    #[test]
    fn test_invalid_utf8_line_is_reported_and_skipped() {
        let mut console = Console::new(Session::new(), Vec::new());
        console
            .run_interactive(
                &b"measure forward 0.2\n\xff\xfe\nmeasure forward 0.3\n"[..],
                false,
            )
            .unwrap();
        let (session, out) = console.into_parts();
        let voltages: Vec<f64> = session.readings().iter().map(|r| r.voltage).collect();
        assert_eq!(voltages, vec![0.2, 0.3]);
        assert!(String::from_utf8(out).unwrap().contains("at line 2"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, out) = run("quit\nmeasure forward 0.5\n");
        assert!(session.readings().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_plot_and_table_on_empty_log() {
        let (_, out) = run("plot\ntable\nreset\n");
        assert_eq!(out.matches("No readings yet").count(), 2);
        assert!(out.contains("Experiment reset."));
    }

    #[test]
    fn test_run_script() {
        let commands = script::parse("measure f 0.2\nreset\nmeasure r 0.5\nquit\nmeasure f 1\n").unwrap();
        let mut console = Console::new(Session::new(), Vec::new());
        console.run_script(&commands).unwrap();
        let readings = console.session().readings();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].voltage, -0.5);
    }
}
