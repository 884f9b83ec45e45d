//! Two metrics layers: a lock-guarded counter pair feeding the once-a-minute
//! log line, and an ambient Prometheus registry for operator scraping.

use lazy_static::lazy_static;
use parking_lot::RwLock;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

lazy_static! {
    pub static ref EVENTS_TOTAL: IntCounter = register_int_counter!(
        "guzzle_events_total",
        "Total Jetstream events received"
    )
    .unwrap();
    pub static ref POSTS_WRITTEN_TOTAL: IntCounter = register_int_counter!(
        "guzzle_posts_written_total",
        "Total posts written to the store"
    )
    .unwrap();
    pub static ref CONFLICTS_TOTAL: IntCounter = register_int_counter!(
        "guzzle_conflicts_total",
        "Total Conflict outcomes absorbed as idempotent no-ops"
    )
    .unwrap();
    pub static ref EXTRACT_ERRORS_TOTAL: IntCounter = register_int_counter!(
        "guzzle_extract_errors_total",
        "Total events discarded for failing to decode as a post record"
    )
    .unwrap();
    pub static ref BACKEND_ERRORS_TOTAL: IntCounter = register_int_counter!(
        "guzzle_backend_errors_total",
        "Total store write errors other than Conflict"
    )
    .unwrap();
}

/// Encodes the Prometheus registry in the text exposition format.
pub fn encode_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// The once-a-minute counter pair: event count and byte count, mutated only
/// by the event pipeline and read only by the minute ticker below.
#[derive(Debug, Default)]
struct Counters {
    events: u64,
    bytes: u64,
}

#[derive(Debug, Default)]
pub struct IngestCounters(RwLock<Counters>);

impl IngestCounters {
    pub fn new() -> Self {
        Self(RwLock::new(Counters::default()))
    }

    pub fn record_event(&self, byte_len: usize) {
        let mut counters = self.0.write();
        counters.events += 1;
        counters.bytes += byte_len as u64;
        EVENTS_TOTAL.inc();
    }

    fn snapshot(&self) -> (u64, u64) {
        let counters = self.0.read();
        (counters.events, counters.bytes)
    }
}

/// Wakes once a minute and emits the canonical log line; exits when `token`
/// is cancelled.
pub async fn run_minute_ticker(
    counters: std::sync::Arc<IngestCounters>,
    token: CancellationToken,
) {
    let mut interval = tokio::time::interval(Duration::from_secs(60));
    interval.tick().await; // first tick fires immediately; skip it
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                let (events, bytes) = counters.snapshot();
                info!(events, bytes, "guzzle ingest metrics");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_across_events() {
        let counters = IngestCounters::new();
        counters.record_event(10);
        counters.record_event(25);
        assert_eq!(counters.snapshot(), (2, 35));
    }
}
