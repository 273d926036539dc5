//! Nonce generation for Bleutrade API authentication.
//!
//! Bleutrade expects a Unix timestamp in seconds as the `nonce` query
//! parameter of private requests, and rejects values lower than ones it
//! has already seen for the same key.

use std::sync::atomic::{AtomicU64, Ordering};

use time::OffsetDateTime;

/// Trait for providing nonces for authenticated requests.
///
/// Inject a custom provider through the client builder to make URL
/// construction deterministic in tests.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    ///
    /// This value must not be lower than any previously returned value.
    fn next_nonce(&self) -> u64;
}

type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

/// A nonce provider returning whole seconds since the Unix epoch.
///
/// The clock is read on every call. If it steps backwards the last issued
/// value is repeated, so the sequence is non-decreasing.
pub struct UnixTimeNonce {
    clock: Clock,
    last_nonce: AtomicU64,
}

impl UnixTimeNonce {
    /// Create a provider backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Self::current_time_secs)
    }

    /// Create a provider backed by a custom clock returning Unix seconds.
    pub fn with_clock(clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last_nonce: AtomicU64::new(0),
        }
    }

    fn current_time_secs() -> u64 {
        let secs = OffsetDateTime::now_utc().unix_timestamp();
        u64::try_from(secs).unwrap_or_default()
    }
}

impl Default for UnixTimeNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UnixTimeNonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnixTimeNonce")
            .field("last_nonce", &self.last_nonce.load(Ordering::Relaxed))
            .finish()
    }
}

impl NonceProvider for UnixTimeNonce {
    fn next_nonce(&self) -> u64 {
        let now = (self.clock)();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = now.max(last);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    #[test]
    fn test_nonce_is_unix_seconds() {
        let provider = UnixTimeNonce::new();
        let nonce = provider.next_nonce();
        // 2020-01-01 and 2100-01-01: seconds, not millis or micros.
        assert!(nonce > 1_577_836_800);
        assert!(nonce < 4_102_444_800);
    }

    #[test]
    fn test_nonce_non_decreasing() {
        let provider = UnixTimeNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce >= last, "Nonce must never decrease");
            last = nonce;
        }
    }

    #[test]
    fn test_clock_stepping_back_repeats_last_nonce() {
        let ticks = [1_700_000_010u64, 1_700_000_005, 1_700_000_020];
        let calls = AtomicUsize::new(0);
        let provider = UnixTimeNonce::with_clock(move || {
            ticks[calls.fetch_add(1, Ordering::SeqCst) % ticks.len()]
        });

        assert_eq!(provider.next_nonce(), 1_700_000_010);
        assert_eq!(provider.next_nonce(), 1_700_000_010);
        assert_eq!(provider.next_nonce(), 1_700_000_020);
    }

    #[test]
    fn test_nonce_non_decreasing_across_threads() {
        let provider = Arc::new(UnixTimeNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        for handle in handles {
            let nonces = handle.join().unwrap();
            assert!(nonces.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
