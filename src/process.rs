use std::collections::HashMap;

use chrono::Local;

use crate::{
    error_time, extract_tid, info_time, read_registry, select_contiguous, ApiClient, CacheStore,
    Config, Error, Result, REGISTRY_PATH,
};

/// What happened to a single edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditionOutcome {
    NoTid,
    Skipped,
    Fetched(usize),
    Failed(String),
}

/// Tally of a finished batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub no_tid: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &EditionOutcome) {
        match outcome {
            EditionOutcome::NoTid => self.no_tid += 1,
            EditionOutcome::Skipped => self.skipped += 1,
            EditionOutcome::Fetched(_) => self.fetched += 1,
            EditionOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Runs the whole batch described by `config`.
/// Returns `Err(Error::RateLimited)` as soon as the API quota runs out, leaving
/// the remaining editions untouched.
pub async fn process_editions(config: &Config) -> Result<BatchSummary> {
    let start_time = Local::now();
    let links = read_registry(&config.root.join(REGISTRY_PATH)).await?;
    info_time!("Loaded {} registry entries", links.len());

    let api = ApiClient::new(
        reqwest::Client::new(),
        config.endpoint.as_str(),
        config.token.as_str(),
    );
    let store = CacheStore::new(&config.root);

    let mut summary = BatchSummary::default();
    for edition in config.range.clone() {
        let outcome = match process_edition(edition, &links, &api, &store).await {
            Ok(outcome) => outcome,
            Err(Error::RateLimited) => {
                error_time!("edition {edition}: hourly call limit exceeded, stopping batch");
                return Err(Error::RateLimited);
            }
            Err(e) => EditionOutcome::Failed(e.to_string()),
        };
        log_outcome(edition, &outcome);
        summary.record(&outcome);
    }

    info_time!(
        start_time,
        "Finished editions {}..={}: {} fetched, {} skipped, {} without tid, {} failed",
        config.range.start(),
        config.range.end(),
        summary.fetched,
        summary.skipped,
        summary.no_tid,
        summary.failed
    );
    Ok(summary)
}

/// Process status for a finished batch: any error that reaches here, a
/// rate-limit halt included, is a failed run.
pub fn exit_code(result: &Result<BatchSummary>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn process_edition(
    edition: u64,
    links: &HashMap<String, String>,
    api: &ApiClient,
    store: &CacheStore,
) -> Result<EditionOutcome> {
    let link = links.get(&edition.to_string()).map_or("", String::as_str);
    let Some(tid) = extract_tid(link) else {
        return Ok(EditionOutcome::NoTid);
    };
    if store.is_done(edition).await {
        return Ok(EditionOutcome::Skipped);
    }

    let posts = api.fetch_posts(&tid).await?;
    let run = select_contiguous(&posts);
    store.write(edition, run).await?;
    Ok(EditionOutcome::Fetched(run.len()))
}

fn log_outcome(edition: u64, outcome: &EditionOutcome) {
    match outcome {
        EditionOutcome::NoTid => info_time!("edition {edition}: no tid found"),
        EditionOutcome::Skipped => info_time!("edition {edition}: skipping, already cached"),
        EditionOutcome::Fetched(n) => info_time!("edition {edition}: fetched {n} post(s)"),
        EditionOutcome::Failed(msg) => error_time!("edition {edition}: failed: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_each_outcome() {
        let mut summary = BatchSummary::default();
        for outcome in [
            EditionOutcome::NoTid,
            EditionOutcome::Fetched(2),
            EditionOutcome::Fetched(0),
            EditionOutcome::Skipped,
            EditionOutcome::Failed("boom".into()),
        ] {
            summary.record(&outcome);
        }
        assert_eq!(
            summary,
            BatchSummary {
                fetched: 2,
                skipped: 1,
                no_tid: 1,
                failed: 1,
            }
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&Ok(BatchSummary::default())), 0);
        assert_eq!(
            exit_code(&Ok(BatchSummary {
                failed: 3,
                ..BatchSummary::default()
            })),
            0
        );
        assert_eq!(exit_code(&Err(Error::RateLimited)), 1);
        assert_eq!(
            exit_code(&Err(Error::RegistryMissing("news/editions.csv".into()))),
            1
        );
    }
}
