use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;

use crate::{Error, Result, DEFAULT_ENDPOINT};

#[derive(Debug, Parser)]
#[command(name = "scrap-editions", version)]
#[command(about = "Caches the opening author's posts for a range of editions", long_about = None)]
pub struct Args {
    /// First edition to process
    #[arg(short, long)]
    pub start: u64,

    /// Last edition to process (inclusive)
    #[arg(short, long)]
    pub end: u64,

    /// API authorization token
    #[arg(short, long, env = "HARVEST_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Directory that contains `news/`
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Forum API read endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

/// Validated settings for one batch run.
#[derive(Debug, Clone)]
pub struct Config {
    pub range: RangeInclusive<u64>,
    pub token: String,
    pub root: PathBuf,
    pub endpoint: String,
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.end < args.start {
            return Err(Error::InvalidRange {
                start: args.start,
                end: args.end,
            });
        }
        Ok(Self {
            range: args.start..=args.end,
            token: args.token,
            root: args.root,
            endpoint: args.endpoint,
        })
    }
}
