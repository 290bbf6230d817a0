//! xrange Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all xrange crates.

use serde::Deserialize;

/// Largest integer magnitude an `f64` represents without gaps (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Configuration for numeric domain selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    /// Bounds whose magnitude exceeds this value are promoted to
    /// arbitrary-precision integers
    pub safe_integer_max: u64,
}

impl DomainConfig {
    /// Magnitude threshold as a fixed-width number
    pub fn threshold(&self) -> f64 {
        self.safe_integer_max as f64
    }

    /// Whether a fixed-width magnitude is beyond the safe range
    pub fn exceeds(&self, value: f64) -> bool {
        value.abs() > self.threshold()
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            safe_integer_max: MAX_SAFE_INTEGER,
        }
    }
}

/// Execution phase enum for phase-specific log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Normalize,
    Produce,
}

impl Phase {
    /// Get the string name of the phase
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Normalize => "normalize",
            Phase::Produce => "produce",
        }
    }

    /// Get the log target name for this phase
    pub const fn target(&self) -> &'static str {
        match self {
            Phase::Normalize => "xrange::normalize",
            Phase::Produce => "xrange::produce",
        }
    }
}
