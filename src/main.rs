//! Reads a robot mission from a file or stdin and prints where each robot ended up.

use clap::{Parser, ValueEnum};
use martian_robots::{Error, Grid, RobotReport, SimulationConfig, parse_input};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "martian-robots")]
#[command(about = "Simulate robots moving across a grid on Mars")]
struct Cli {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Largest accepted grid bound
    #[arg(
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(i32).range(0..=i64::from(Grid::MAX_BOUND)),
    )]
    max_bound: i32,

    /// Largest accepted number of non-blank input lines
    #[arg(long, default_value_t = 100)]
    max_lines: usize,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("martian_robots=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(p) if p.as_os_str() != "-" => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn simulate(cli: &Cli) -> Result<Vec<RobotReport>, Error> {
    let input = read_input(cli.input.as_ref())?;
    let config = SimulationConfig {
        max_bound: cli.max_bound,
        max_input_lines: cli.max_lines,
    };
    parse_input(&input, &config)?.run()
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let report = match simulate(&cli) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match cli.format {
        Format::Text => {
            for line in &report {
                println!("{line}");
            }
        }
        Format::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("failed to encode report: {e}");
                process::exit(1);
            }
        },
    }
}
