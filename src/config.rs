//! Command-line settings for the host.

use crate::operation::{Inputs, Operation};
use clap::Parser;
use std::ffi::OsString;

/// Draws two vectors and applies an operation to them
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "vecdraw")]
#[command(about = "Two-vector operation visualizer", long_about = None)]
pub struct Args {
    /// First vector as X,Y
    #[arg(long, value_parser = parse_pair, default_value = "1,1", allow_hyphen_values = true)]
    pub v1: (f32, f32),

    /// Second vector as X,Y
    #[arg(long, value_parser = parse_pair, default_value = "2,1", allow_hyphen_values = true)]
    pub v2: (f32, f32),

    /// Operation (add, sub, mul, div, angle, magnitude, normalize, area)
    #[arg(long, default_value = "add")]
    pub op: String,

    /// Scalar used by mul and div
    #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub scalar: f32,

    /// Run a single cycle without opening a window
    #[arg(long)]
    pub headless: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub inputs: Inputs,
    /// `None` when the requested tag is not a known operation.
    pub operation: Option<Operation>,
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            inputs: Inputs::default(),
            operation: Some(Operation::Add),
            headless: false,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Config {
        let operation = match args.op.parse::<Operation>() {
            Ok(op) => Some(op),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };
        Config {
            inputs: Inputs {
                v1x: args.v1.0,
                v1y: args.v1.1,
                v2x: args.v2.0,
                v2y: args.v2.1,
                scalar: args.scalar,
            },
            operation,
            headless: args.headless,
        }
    }
}

fn parse_pair(value: &str) -> Result<(f32, f32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {value:?}"))?;
    let number = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|e| format!("{s:?} is not a number: {e}"))
    };
    Ok((number(x)?, number(y)?))
}

/// Parse a full command line, program name first.
pub fn parse_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map(Config::from)
}
