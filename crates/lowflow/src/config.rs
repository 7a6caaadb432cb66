//! Configuration for low-flow detection.

use crate::error::LowFlowError;

/// Parameters of the low-flow run detector.
///
/// # Example
///
/// ```
/// use hydrostat_lowflow::LowFlowConfig;
///
/// let config = LowFlowConfig::new(2.5).with_min_length(7).with_max_gap(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LowFlowConfig {
    threshold: f64,
    min_length: usize,
    max_gap: usize,
}

impl LowFlowConfig {
    /// Creates a configuration for the given discharge threshold (m³/s).
    ///
    /// Defaults: `min_length = 5`, `max_gap = 4`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_length: 5,
            max_gap: 4,
        }
    }

    /// Sets the minimum run length in days.
    pub fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    /// Sets the gap (days between runs) below which runs are merged.
    pub fn with_max_gap(mut self, n: usize) -> Self {
        self.max_gap = n;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Checks that the threshold is finite and `min_length >= 1`.
    pub fn validate(&self) -> Result<(), LowFlowError> {
        if !self.threshold.is_finite() {
            return Err(LowFlowError::InvalidConfig {
                reason: format!("threshold must be finite, got {}", self.threshold),
            });
        }
        if self.min_length < 1 {
            return Err(LowFlowError::InvalidConfig {
                reason: format!("min_length must be >= 1, got {}", self.min_length),
            });
        }
        Ok(())
    }
}
