//! The Ingestion Engine: owns the endpoint pool, drives the reconnect loop
//! against the Jetstream websocket, and writes accepted events through the
//! `Store`. Construction opens the log sink; `run` drives the pipeline until
//! its `CancellationToken` fires.

use crate::config::GuzzleConfig;
use crate::error::GuzzleError;
use crate::extractor::{extract, ExtractOutcome, PostParams, Skip};
use crate::jetstream::read;
use crate::metrics::{self, run_minute_ticker, IngestCounters};
use crate::pool::{EndpointPool, PoolState};
use crate::store::{CreatePostParams, Store};
use chrono::{NaiveDate, TimeZone, Utc};
use futures_util::StreamExt;
use std::path::Path;
use std::sync::Arc;
use tokio_tungstenite::connect_async;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tungstenite::Message;
use url::Url;

/// What a single websocket session ended with; always resolves back into a
/// `Cooldown` transition in the caller except on cancellation.
enum SessionEnd {
    Cancelled,
    Ended,
}

pub struct Guzzle {
    store: Arc<dyn Store>,
    jetstream_urls: Vec<String>,
    counters: Arc<IngestCounters>,
    _log_guard: WorkerGuard,
}

impl Guzzle {
    /// Opens the configured log sink and wires the engine to an
    /// already-constructed store. Fails if the log path's parent directory
    /// cannot be created.
    pub fn new(config: &GuzzleConfig, store: Arc<dyn Store>) -> Result<Self, GuzzleError> {
        let log_path = Path::new(&config.log_path);
        let (directory, file_name) = match (log_path.parent(), log_path.file_name()) {
            (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => (dir.to_path_buf(), name.to_owned()),
            (_, Some(name)) => (Path::new(".").to_path_buf(), name.to_owned()),
            _ => return Err(GuzzleError::Invalid(format!("invalid log path: {}", config.log_path))),
        };
        std::fs::create_dir_all(&directory)?;

        let appender = tracing_appender::rolling::never(&directory, &file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .with(fmt::layer())
            .try_init();

        Ok(Self {
            store,
            jetstream_urls: config.jetstream_urls.clone(),
            counters: Arc::new(IngestCounters::new()),
            _log_guard: guard,
        })
    }

    /// Drives the reconnect loop against the endpoint pool until `ctx` is
    /// cancelled. `cursor_string` is a DD/MM/YYYY resume position, or empty
    /// to start from the live tip.
    pub async fn run(&self, ctx: CancellationToken, cursor_string: &str) -> Result<(), GuzzleError> {
        let mut cursor = parse_cursor(cursor_string)?;

        let ticker = tokio::spawn(run_minute_ticker(self.counters.clone(), ctx.clone()));

        let result = self.run_event_loop(&ctx, &mut cursor).await;

        ctx.cancel();
        let _ = ticker.await;
        result
    }

    /// Releases the store handle, then the log sink. Consumes the engine.
    pub fn close(self) {
        info!("closing guzzle engine");
        drop(self.store);
        drop(self._log_guard);
    }

    async fn run_event_loop(
        &self,
        ctx: &CancellationToken,
        cursor: &mut Option<i64>,
    ) -> Result<(), GuzzleError> {
        let mut pool = EndpointPool::new(self.jetstream_urls.clone());

        loop {
            if ctx.is_cancelled() {
                return Ok(());
            }

            match pool.state().clone() {
                PoolState::Connecting(_) => {
                    let base = pool
                        .current_url()
                        .expect("Connecting state always carries a URL")
                        .to_string();
                    let url = build_url(&base, *cursor)?;

                    pool.connected();
                    info!(%url, "connecting to jetstream endpoint");

                    match connect_async(url.as_str()).await {
                        Ok((ws_stream, _response)) => {
                            info!(%url, "connected to jetstream endpoint");
                            match self.stream_events(ws_stream, ctx, cursor).await {
                                SessionEnd::Cancelled => return Ok(()),
                                SessionEnd::Ended => {
                                    warn!(%url, "jetstream connection ended");
                                }
                            }
                        }
                        Err(e) => {
                            warn!(%url, error = %e, "failed to connect to jetstream endpoint");
                        }
                    }
                    pool.disconnected();
                }
                PoolState::Cooldown(_) | PoolState::Exhausted => {
                    let wait = pool.wait_duration().unwrap_or_default();
                    info!(?wait, "waiting before the next jetstream attempt");
                    tokio::select! {
                        _ = ctx.cancelled() => return Ok(()),
                        _ = tokio::time::sleep(wait) => {}
                    }
                    pool.advance();
                }
                PoolState::Streaming(_) => unreachable!("streaming is only ever observed mid-session"),
            }
        }
    }

    async fn stream_events(
        &self,
        mut ws_stream: tokio_tungstenite::WebSocketStream<
            tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
        >,
        ctx: &CancellationToken,
        cursor: &mut Option<i64>,
    ) -> SessionEnd {
        loop {
            let next = tokio::select! {
                _ = ctx.cancelled() => return SessionEnd::Cancelled,
                item = ws_stream.next() => item,
            };

            let Some(message) = next else {
                return SessionEnd::Ended;
            };

            let message = match message {
                Ok(message) => message,
                Err(e) => {
                    warn!(error = %e, "jetstream websocket error");
                    return SessionEnd::Ended;
                }
            };

            match message {
                Message::Text(text) => {
                    self.handle_message(&text.to_string(), cursor).await;
                }
                Message::Close(frame) => {
                    info!(?frame, "jetstream connection closed by peer");
                    return SessionEnd::Ended;
                }
                _ => {}
            }
        }
    }

    async fn handle_message(&self, text: &str, cursor: &mut Option<i64>) {
        self.counters.record_event(text.len());

        let event = match read(text) {
            Ok(event) => event,
            Err(e) => {
                metrics::EXTRACT_ERRORS_TOTAL.inc();
                warn!(error = %e, "failed to decode jetstream message");
                return;
            }
        };
        *cursor = Some(event.cursor());

        let outcome = match extract(&event) {
            Ok(outcome) => outcome,
            Err(e) => {
                metrics::EXTRACT_ERRORS_TOTAL.inc();
                warn!(error = %e, "failed to extract post record");
                return;
            }
        };

        match outcome {
            ExtractOutcome::Accepted(params) => self.persist(params).await,
            ExtractOutcome::Skipped(Skip::DeleteLogged { rkey }) => {
                info!(rkey, "delete observed, not applied");
            }
            ExtractOutcome::Skipped(_) => {}
        }
    }

    async fn persist(&self, params: PostParams) {
        let post_id = params.post_id.clone();
        let result = self
            .store
            .create_post_with_tags(CreatePostParams {
                post_id: params.post_id,
                creator_did: params.creator_did,
                created_at: params.created_at,
                text: params.text,
                tags: params.tags,
            })
            .await;

        match result {
            Ok(_) => {
                metrics::POSTS_WRITTEN_TOTAL.inc();
                info!(post_id, "post persisted");
            }
            Err(GuzzleError::Conflict) => {
                metrics::CONFLICTS_TOTAL.inc();
                info!(post_id, "duplicate post ignored");
            }
            Err(e) => {
                metrics::BACKEND_ERRORS_TOTAL.inc();
                error!(post_id, error = %e, "failed to persist post");
            }
        }
    }
}

/// Parses a DD/MM/YYYY resume position into microseconds since the Unix
/// epoch at that date's UTC midnight. An empty string means "no cursor",
/// i.e. start from the live tip.
fn parse_cursor(cursor: &str) -> Result<Option<i64>, GuzzleError> {
    if cursor.is_empty() {
        return Ok(None);
    }
    let date = NaiveDate::parse_from_str(cursor, "%d/%m/%Y")
        .map_err(|e| GuzzleError::Invalid(format!("invalid cursor {cursor:?}: {e}")))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time");
    let at_midnight_utc = Utc.from_utc_datetime(&midnight);
    Ok(Some(at_midnight_utc.timestamp_micros()))
}

fn build_url(base: &str, cursor: Option<i64>) -> Result<Url, GuzzleError> {
    let mut url =
        Url::parse(base).map_err(|e| GuzzleError::Invalid(format!("invalid jetstream url {base:?}: {e}")))?;
    if let Some(cursor) = cursor {
        url.query_pairs_mut().append_pair("cursor", &cursor.to_string());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_dd_mm_yyyy_cursor_to_midnight_utc_micros() {
        let parsed = parse_cursor("13/11/2024").unwrap().unwrap();
        let expected = Utc
            .with_ymd_and_hms(2024, 11, 13, 0, 0, 0)
            .unwrap()
            .timestamp_micros();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn empty_cursor_means_start_from_the_live_tip() {
        assert_eq!(parse_cursor("").unwrap(), None);
    }

    #[test]
    fn rejects_a_malformed_cursor() {
        assert!(matches!(parse_cursor("2024-11-13"), Err(GuzzleError::Invalid(_))));
    }

    #[test]
    fn appends_cursor_as_a_query_parameter() {
        let url = build_url("wss://jetstream1.us-east.bsky.network/subscribe", Some(42)).unwrap();
        assert_eq!(url.query_pairs().find(|(k, _)| k == "cursor").map(|(_, v)| v.into_owned()), Some("42".to_string()));
    }

    #[test]
    fn omits_cursor_query_parameter_when_absent() {
        let url = build_url("wss://jetstream1.us-east.bsky.network/subscribe", None).unwrap();
        assert!(url.query_pairs().find(|(k, _)| k == "cursor").is_none());
    }
}
