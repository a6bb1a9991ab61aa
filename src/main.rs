//! pnlab - PN Junction I-V Characteristics Simulator
//!
//! # Usage
//!
//! ```bash
//! pnlab                           # interactive session on stdin
//! pnlab sweep.lab --output iv.svg # run a command script
//! ```

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use pn_junction_lab::{
    console::Console,
    error::Result,
    render::{PlotConfig, DEFAULT_PLOT_PATH},
    readings::{DEFAULT_CAPACITY, DEFAULT_INTERPOLATION_SAMPLES},
    script,
    Session, SessionConfig,
};

/// PN junction diode I-V characteristics simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command script to run instead of reading stdin
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// File the I-V plot is written to
    #[arg(short, long, default_value = DEFAULT_PLOT_PATH)]
    output: PathBuf,

    /// Maximum number of readings per session
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Number of interpolated samples in the I-V curve
    #[arg(short, long, default_value_t = DEFAULT_INTERPOLATION_SAMPLES)]
    samples: usize,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = SessionConfig::new()
        .with_capacity(args.capacity)
        .with_interpolation_samples(args.samples);
    let session = Session::with_config(config)?;

    let plot_config = PlotConfig::default();
    plot_config.validate()?;

    let interactive = args.script.is_none() && io::stdin().is_terminal();
    if interactive {
        println!("PN Junction Characteristics Simulator (type 'help' for commands)");
    }

    let mut console = Console::new(session, io::stdout().lock())
        .with_plot_config(plot_config)
        .with_plot_path(args.output);

    match args.script {
        Some(path) => {
            let commands = script::parse_file(&path)?;
            info!("running {} command(s) from {}", commands.len(), path.display());
            console.run_script(&commands)
        }
        None => console.run_interactive(io::stdin().lock(), interactive),
    }
}
