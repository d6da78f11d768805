use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Shortest sleep the poller accepts; a zero interval would spin.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Sleep between clipboard reads; trades latency against CPU usage.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
}

impl PollerConfig {
    /// The configured interval, raised to [`MIN_POLL_INTERVAL`].
    pub fn effective_interval(&self) -> Duration {
        self.interval.max(MIN_POLL_INTERVAL)
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_humantime_interval() {
        let cfg: PollerConfig = toml::from_str(r#"interval = "250ms""#).unwrap();
        assert_eq!(cfg.interval, Duration::from_millis(250));
    }

    #[test]
    fn zero_interval_is_raised_to_minimum() {
        let cfg: PollerConfig = toml::from_str(r#"interval = "0ms""#).unwrap();
        assert_eq!(cfg.interval, Duration::ZERO);
        assert_eq!(cfg.effective_interval(), MIN_POLL_INTERVAL);
        assert_eq!(PollerConfig::default().effective_interval(), DEFAULT_POLL_INTERVAL);
    }

    #[test]
    fn missing_interval_uses_default() {
        let cfg: PollerConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, PollerConfig::default());
    }
}
