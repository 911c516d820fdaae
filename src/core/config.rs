//! Demo session configuration
//!
//! Bundles the tunables of a wallet session: the fixed one-time code, the
//! sequence-generator seeds, the confirmation-delay window, and the
//! simulated API latencies carried over from the demo front end. Defaults
//! reproduce the original demo timing; [`DemoConfig::instant`] zeroes the
//! latencies for tests and fast CLI runs.

use crate::core::sequence::Sequence;
use std::time::Duration;

/// Simulated per-operation API latency
///
/// The demo front end delays each adapter call to feel like a network
/// round-trip. The ledger logic is independent of these values; they only
/// pace the session facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyProfile {
    /// `request_code` delay
    pub login: Duration,
    /// `verify_code` delay
    pub verify: Duration,
    /// `user` snapshot delay
    pub fetch_user: Duration,
    /// `deposit` delay
    pub deposit: Duration,
    /// `withdraw` delay
    pub withdraw: Duration,
    /// `reset_to_initial` delay
    pub reset: Duration,
}

impl LatencyProfile {
    /// Zero latency everywhere; for tests and `--fast` runs
    pub fn instant() -> Self {
        LatencyProfile {
            login: Duration::ZERO,
            verify: Duration::ZERO,
            fetch_user: Duration::ZERO,
            deposit: Duration::ZERO,
            withdraw: Duration::ZERO,
            reset: Duration::ZERO,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        LatencyProfile {
            login: Duration::from_millis(1000),
            verify: Duration::from_millis(800),
            fetch_user: Duration::from_millis(500),
            deposit: Duration::from_millis(2000),
            withdraw: Duration::from_millis(2500),
            reset: Duration::from_millis(500),
        }
    }
}

/// Configuration for one demo wallet session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Fixed one-time code accepted by `verify_code`
    pub demo_code: String,

    /// Seed for the amount/token sequence generator
    pub seed: u64,

    /// Seed for the confirmation-delay jitter generator
    ///
    /// Independent of `seed` so scheduling never consumes draws from the
    /// amount/token stream.
    pub jitter_seed: u64,

    /// Lower bound of the confirmation delay window
    pub confirm_delay_min: Duration,

    /// Upper bound of the confirmation delay window
    pub confirm_delay_max: Duration,

    /// Simulated API latencies
    pub latency: LatencyProfile,
}

impl DemoConfig {
    /// Default configuration with zero simulated latency
    pub fn instant() -> Self {
        DemoConfig {
            latency: LatencyProfile::instant(),
            ..Default::default()
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            demo_code: "123456".to_string(),
            seed: Sequence::DEFAULT_SEED,
            jitter_seed: 54321,
            confirm_delay_min: Duration::from_secs(5),
            confirm_delay_max: Duration::from_secs(15),
            latency: LatencyProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_demo_timing() {
        let config = DemoConfig::default();
        assert_eq!(config.demo_code, "123456");
        assert_eq!(config.seed, 12345);
        assert_eq!(config.latency.deposit, Duration::from_millis(2000));
        assert_eq!(config.confirm_delay_min, Duration::from_secs(5));
        assert_eq!(config.confirm_delay_max, Duration::from_secs(15));
    }

    #[test]
    fn test_instant_zeroes_latency_only() {
        let config = DemoConfig::instant();
        assert_eq!(config.latency, LatencyProfile::instant());
        // The confirmation window is unaffected
        assert_eq!(config.confirm_delay_min, Duration::from_secs(5));
        assert_eq!(config.confirm_delay_max, Duration::from_secs(15));
    }
}
