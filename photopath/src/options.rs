use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Position photos from GPS tracks and chain them for sequential
/// navigation.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Position photos, link them into a chain and print JSON to
    /// stdout.
    Chain(Chain),

    /// Print the track position at a given time.
    Locate(Locate),

    /// Merge GPX files into one.
    Merge(Merge),
}

#[derive(Debug, Clone, Args)]
pub struct Chain {
    /// JSON array of photo metadata records. Array order is chain
    /// order.
    #[arg(short, long)]
    pub photos: PathBuf,

    /// GPX track logs for photos without coordinates. May be repeated;
    /// tracks are scanned in the order given.
    #[arg(short, long = "track")]
    pub tracks: Vec<PathBuf>,

    /// Position photos but don't add connections and headings.
    #[arg(long, default_value_t = false)]
    pub skip_connections: bool,

    /// Pretty print JSON output.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Args)]
pub struct Locate {
    /// RFC 3339 time, e.g. "2022-10-22T08:10:00Z".
    #[arg(long)]
    pub time: DateTime<Utc>,

    /// Input GPX track logs.
    #[arg(required = true)]
    pub tracks: Vec<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct Merge {
    /// Output GPX file.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Input GPX track logs.
    #[arg(required = true)]
    pub input: Vec<PathBuf>,
}
