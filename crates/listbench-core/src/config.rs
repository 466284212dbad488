//! Harness configuration and validation.
//!
//! [`HarnessConfig`] is fixed at build time: single-shot mode, one fork,
//! 100 warmup and 100 measurement iterations of 100,000 invocations each.
//! [`validate()`](HarnessConfig::validate) checks that the harness can
//! actually honour it before any operation runs.

use std::error::Error;
use std::fmt;

use crate::operation::SUITE_NAME;

/// Smallest sample count the harness accepts per operation.
pub const MIN_MEASUREMENT_ITERATIONS: usize = 10;

// ── BatchConfig ────────────────────────────────────────────────────

/// Shape of one phase (warmup or measurement).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Invocations per single-shot batch. Default: 100,000.
    pub batch_size: u64,
    /// Number of batches in the phase. Default: 100.
    pub iterations: usize,
}

impl BatchConfig {
    /// Total invocations across the phase.
    pub fn total_invocations(&self) -> u64 {
        self.batch_size.saturating_mul(self.iterations as u64)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 100_000,
            iterations: 100,
        }
    }
}

/// How each measured iteration is timed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeMode {
    /// One timer around a whole batch; no averaging over a tight loop.
    #[default]
    SingleShot,
}

/// Unit results are reported in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeUnit {
    /// Milliseconds per batch.
    #[default]
    Milliseconds,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`HarnessConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The include pattern is empty.
    EmptyInclude,
    /// A phase has a batch size of zero.
    ZeroBatchSize {
        /// Which phase: `"warmup"` or `"measurement"`.
        phase: &'static str,
    },
    /// The warmup phase has no iterations.
    NoWarmupIterations,
    /// Fewer measurement iterations than the harness can sample.
    TooFewMeasurementIterations {
        /// The configured count.
        configured: usize,
    },
    /// Fork count other than one.
    UnsupportedForks {
        /// The configured count.
        configured: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInclude => write!(f, "include pattern must not be empty"),
            Self::ZeroBatchSize { phase } => {
                write!(f, "{phase} batch_size must be at least 1")
            }
            Self::NoWarmupIterations => write!(f, "warmup iterations must be at least 1"),
            Self::TooFewMeasurementIterations { configured } => write!(
                f,
                "measurement iterations {configured} is below minimum of {MIN_MEASUREMENT_ITERATIONS}"
            ),
            Self::UnsupportedForks { configured } => {
                write!(f, "forks must be 1, got {configured}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── HarnessConfig ──────────────────────────────────────────────────

/// Settings handed to the benchmark harness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Substring an operation id must contain to run. Default: the suite name.
    pub include: String,
    /// Separate processes to run the suite in. Default: 1.
    pub forks: u32,
    /// Untimed batches run before measurement.
    pub warmup: BatchConfig,
    /// Timed batches; one sample per batch.
    pub measurement: BatchConfig,
    /// Timing mode. Default: single-shot.
    pub mode: TimeMode,
    /// Reporting unit. Default: milliseconds.
    pub time_unit: TimeUnit,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            include: SUITE_NAME.to_string(),
            forks: 1,
            warmup: BatchConfig::default(),
            measurement: BatchConfig::default(),
            mode: TimeMode::default(),
            time_unit: TimeUnit::default(),
        }
    }
}

impl HarnessConfig {
    /// Check every setting the harness depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.include.is_empty() {
            return Err(ConfigError::EmptyInclude);
        }
        if self.forks != 1 {
            return Err(ConfigError::UnsupportedForks {
                configured: self.forks,
            });
        }
        if self.warmup.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize { phase: "warmup" });
        }
        if self.warmup.iterations == 0 {
            return Err(ConfigError::NoWarmupIterations);
        }
        if self.measurement.batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize {
                phase: "measurement",
            });
        }
        if self.measurement.iterations < MIN_MEASUREMENT_ITERATIONS {
            return Err(ConfigError::TooFewMeasurementIterations {
                configured: self.measurement.iterations,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_settings() {
        let config = HarnessConfig::default();
        assert_eq!(config.include, "lists");
        assert_eq!(config.forks, 1);
        assert_eq!(config.warmup.batch_size, 100_000);
        assert_eq!(config.warmup.iterations, 100);
        assert_eq!(config.measurement.batch_size, 100_000);
        assert_eq!(config.measurement.iterations, 100);
        assert_eq!(config.mode, TimeMode::SingleShot);
        assert_eq!(config.time_unit, TimeUnit::Milliseconds);
        config.validate().unwrap();
    }

    #[test]
    fn total_invocations() {
        assert_eq!(BatchConfig::default().total_invocations(), 10_000_000);
        let huge = BatchConfig {
            batch_size: u64::MAX,
            iterations: 2,
        };
        assert_eq!(huge.total_invocations(), u64::MAX);
    }

    #[test]
    fn empty_include_rejected() {
        let config = HarnessConfig {
            include: String::new(),
            ..HarnessConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyInclude));
    }

    #[test]
    fn forks_other_than_one_rejected() {
        for forks in [0, 2] {
            let config = HarnessConfig {
                forks,
                ..HarnessConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::UnsupportedForks { configured: forks })
            );
        }
    }

    #[test]
    fn zero_batch_sizes_rejected() {
        let mut config = HarnessConfig::default();
        config.warmup.batch_size = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroBatchSize { phase: "warmup" })
        );

        let mut config = HarnessConfig::default();
        config.measurement.batch_size = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroBatchSize {
                phase: "measurement"
            })
        );
    }

    #[test]
    fn iteration_bounds() {
        let mut config = HarnessConfig::default();
        config.warmup.iterations = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoWarmupIterations));

        let mut config = HarnessConfig::default();
        config.measurement.iterations = 9;
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewMeasurementIterations { configured: 9 })
        );

        config.measurement.iterations = MIN_MEASUREMENT_ITERATIONS;
        config.validate().unwrap();
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::UnsupportedForks { configured: 3 }.to_string(),
            "forks must be 1, got 3"
        );
        assert_eq!(
            ConfigError::TooFewMeasurementIterations { configured: 2 }.to_string(),
            "measurement iterations 2 is below minimum of 10"
        );
        assert_eq!(
            ConfigError::ZeroBatchSize { phase: "warmup" }.to_string(),
            "warmup batch_size must be at least 1"
        );
    }
}
