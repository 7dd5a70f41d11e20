//! Retry policy for the external recommendation text generator.
//!
//! Scoring itself never retries; only calls to the text generator in
//! [`crate::narrative`] are retried.
//!
//! # Configuration Example
//!
//! ```toml
//! [retry]
//! enabled = true
//! max_attempts = 3
//! base_delay_ms = 1000
//! strategy = "exponential"
//! timeout_seconds = 30
//! jitter_factor = 0.0
//! ```
//!
//! # Retry Strategies
//!
//! - **Constant**: Same delay between each retry
//! - **Linear**: Delay increases linearly (base * attempt)
//! - **Exponential**: Delay doubles each attempt (base * 2^(attempt-1))
//! - **Fibonacci**: Delay follows fibonacci sequence

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration for text generation calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Enable retries (default: true). When disabled the generator is called once.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum number of generator calls, including the first (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base delay between attempts in milliseconds (default: 1000)
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Retry strategy (default: exponential)
    #[serde(default)]
    pub strategy: RetryStrategy,

    /// Maximum total time to spend retrying in seconds (default: 30)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Jitter factor added to delays (default: 0.0)
    #[serde(default = "default_jitter_factor")]
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            strategy: RetryStrategy::default(),
            timeout_seconds: default_timeout_seconds(),
            jitter_factor: default_jitter_factor(),
        }
    }
}

impl RetryConfig {
    /// Create a retry config with retries disabled.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Calculate the delay after a failed attempt.
    ///
    /// The attempt number is 1-indexed (the delay after the first failure is attempt 1).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_delay = self.base_delay();
        let base_ms = self.base_delay_ms as f64;

        let delay_ms = match self.strategy {
            RetryStrategy::Constant => base_ms,
            RetryStrategy::Linear => base_ms * (attempt as f64),
            RetryStrategy::Exponential => base_ms * 2.0_f64.powi(attempt as i32 - 1),
            RetryStrategy::Fibonacci => base_ms * (fibonacci(attempt) as f64),
        };

        let jittered_ms = if self.jitter_factor > 0.0 {
            apply_jitter(delay_ms, self.jitter_factor)
        } else {
            delay_ms
        };

        // Cap at timeout
        let max_delay = self.timeout_seconds * 1000;
        let final_ms = jittered_ms.min(max_delay as f64);

        Duration::from_millis(final_ms as u64).min(base_delay * 100)
    }

    /// Whether another attempt may follow `failed_attempts` failures.
    pub fn should_retry(&self, failed_attempts: u32, elapsed: Duration) -> bool {
        if !self.enabled {
            return false;
        }
        failed_attempts < self.max_attempts && elapsed < self.timeout()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.jitter_factor) {
            return Err(format!(
                "jitter_factor must be between 0.0 and 1.0, got {}",
                self.jitter_factor
            ));
        }
        Ok(())
    }
}

/// Retry delay strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryStrategy {
    Constant,
    Linear,
    #[default]
    Exponential,
    Fibonacci,
}

fn default_enabled() -> bool {
    true
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_jitter_factor() -> f64 {
    0.0
}

/// Compute the nth fibonacci number (1-indexed).
fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 | 2 => 1,
        _ => {
            let mut a = 1u64;
            let mut b = 1u64;
            for _ in 2..n {
                let c = a.saturating_add(b);
                a = b;
                b = c;
            }
            b
        }
    }
}

/// Deterministic jitter: half of the jitter range is always added.
fn apply_jitter(delay_ms: f64, factor: f64) -> f64 {
    delay_ms + (delay_ms * factor * 0.5)
}
