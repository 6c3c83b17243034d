use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Desktop client for the Cranfield search service")]
pub struct Cli {
    /// Base URL of the search service, e.g. http://127.0.0.1:5000
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
