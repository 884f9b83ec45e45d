//! Round-robin pool of equivalent Jetstream endpoints with per-endpoint
//! exponential backoff and a full-pool cooldown, modelled as an explicit
//! state machine so the reconnect policy is testable without a socket.

use std::time::Duration;

pub const BASE_DELAY: Duration = Duration::from_secs(1);
pub const EXHAUSTED_COOLDOWN: Duration = Duration::from_secs(60 * 60);

/// The default Jetstream replica pool.
pub const DEFAULT_JETSTREAM_URLS: [&str; 4] = [
    "wss://jetstream1.us-east.bsky.network/subscribe",
    "wss://jetstream2.us-east.bsky.network/subscribe",
    "wss://jetstream1.us-west.bsky.network/subscribe",
    "wss://jetstream2.us-west.bsky.network/subscribe",
];

#[derive(Debug, Clone, PartialEq)]
pub enum PoolState {
    Connecting(usize),
    Streaming(usize),
    Cooldown(usize),
    Exhausted,
}

/// `backoff(i) = 2^(i+1) * base_delay`: the wait after endpoint `i` fails,
/// computed from the index it is about to advance past. A four-endpoint pool
/// that fails immediately on every attempt backs off `2s, 4s, 8s, 16s`.
pub fn backoff(index: usize) -> Duration {
    BASE_DELAY * 2u32.saturating_pow(index as u32 + 1)
}

/// An ordered, equivalent set of upstream endpoint URLs with an owned cursor
/// through the state machine described in the component design. The pool has
/// no lifecycle beyond its owning engine's: it is driven one transition at a
/// time by the caller rather than running its own task.
pub struct EndpointPool {
    urls: Vec<String>,
    state: PoolState,
}

impl EndpointPool {
    pub fn new(urls: Vec<String>) -> Self {
        assert!(!urls.is_empty(), "endpoint pool requires at least one URL");
        Self {
            urls,
            state: PoolState::Connecting(0),
        }
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// The URL the pool is currently connecting to or streaming from, if any.
    pub fn current_url(&self) -> Option<&str> {
        match self.state {
            PoolState::Connecting(i) | PoolState::Streaming(i) | PoolState::Cooldown(i) => {
                Some(self.urls[i].as_str())
            }
            PoolState::Exhausted => None,
        }
    }

    /// Call once a `Connecting(i)` attempt succeeds.
    pub fn connected(&mut self) {
        if let PoolState::Connecting(i) = self.state {
            self.state = PoolState::Streaming(i);
        }
    }

    /// Call when a `Streaming(i)` session ends with an error (not a
    /// cancellation — the caller handles that separately by stopping before
    /// calling back into the pool at all).
    pub fn disconnected(&mut self) {
        if let PoolState::Streaming(i) = self.state {
            self.state = PoolState::Cooldown(i);
        }
    }

    /// The delay to wait before the next transition out of the current state:
    /// `backoff(i)` from `Cooldown(i)`, or the failure timeout from
    /// `Exhausted`. `None` from `Connecting`/`Streaming`, which have no wait.
    pub fn wait_duration(&self) -> Option<Duration> {
        match self.state {
            PoolState::Cooldown(i) => Some(backoff(i)),
            PoolState::Exhausted => Some(EXHAUSTED_COOLDOWN),
            PoolState::Connecting(_) | PoolState::Streaming(_) => None,
        }
    }

    /// Advances out of `Cooldown`/`Exhausted` once `wait_duration` has
    /// elapsed: moves to the next endpoint in the pool, or into `Exhausted`
    /// once the pool has wrapped back around to index 0.
    pub fn advance(&mut self) {
        match self.state {
            PoolState::Cooldown(i) => {
                let next = (i + 1) % self.urls.len();
                self.state = if next == 0 {
                    PoolState::Exhausted
                } else {
                    PoolState::Connecting(next)
                };
            }
            PoolState::Exhausted => {
                self.state = PoolState::Connecting(0);
            }
            PoolState::Connecting(_) | PoolState::Streaming(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_per_index() {
        assert_eq!(backoff(0), Duration::from_secs(2));
        assert_eq!(backoff(1), Duration::from_secs(4));
        assert_eq!(backoff(2), Duration::from_secs(8));
        assert_eq!(backoff(3), Duration::from_secs(16));
    }

    #[test]
    fn four_endpoint_pool_cycles_through_exhaustion() {
        let urls: Vec<String> = (0..4).map(|i| format!("wss://host{i}")).collect();
        let mut pool = EndpointPool::new(urls);

        let mut backoffs = Vec::new();
        for expected_index in 0..4 {
            assert_eq!(pool.state(), &PoolState::Connecting(expected_index));
            // connection attempt fails immediately: go straight to streaming
            // then disconnect, as a real failed handshake would.
            pool.connected();
            pool.disconnected();
            assert_eq!(pool.state(), &PoolState::Cooldown(expected_index));
            backoffs.push(pool.wait_duration().unwrap());
            pool.advance();
        }

        assert_eq!(
            backoffs,
            vec![
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
                Duration::from_secs(16),
            ]
        );
        assert_eq!(pool.state(), &PoolState::Exhausted);
        assert_eq!(pool.wait_duration(), Some(EXHAUSTED_COOLDOWN));
        pool.advance();
        assert_eq!(pool.state(), &PoolState::Connecting(0));
    }

    #[test]
    fn current_url_tracks_the_active_index() {
        let mut pool = EndpointPool::new(vec!["a".into(), "b".into()]);
        assert_eq!(pool.current_url(), Some("a"));
        pool.connected();
        pool.disconnected();
        pool.advance();
        assert_eq!(pool.current_url(), Some("b"));
    }
}
