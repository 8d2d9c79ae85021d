//! EDITION POST HARVESTER
//! Reads `news/editions.csv`, resolves every edition's thread and caches the
//! opening author's run of posts under `news/editions/<edition>/posts.json`.

mod cache;
pub mod config;
mod error;
mod macros;
pub mod process;
mod registry;
mod request;
mod select;
mod tid;

pub use cache::{is_complete, CacheStore, CachedResult};
pub use config::{Args, Config};
pub use error::{Error, Result};
pub use registry::{build_lookup, parse_records, read_registry, EditionRecord};
pub use request::{ApiClient, Post};
pub use select::select_contiguous;
pub use tid::extract_tid;

const REGISTRY_PATH: &str = "news/editions.csv";
const EDITIONS_DIR: &str = "news/editions";
const CACHE_FILE: &str = "posts.json";
/// Default read endpoint of the forum API, overridable with `--endpoint`.
pub const DEFAULT_ENDPOINT: &str = "https://hackforums.net/api/v2/read";
const CLIENT_ID: &str = concat!("scrap-editions/", env!("CARGO_PKG_VERSION"));
const RATE_LIMIT_MESSAGE: &str = "MAX_HOURLY_CALLS_EXCEEDED";
