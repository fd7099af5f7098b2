//! Defaults shared by the command surface.
//!
//! Every value can be overridden from a TOML file; missing sections and keys
//! fall back to the values below.
//!
//! | Section | Key | Default |
//! |---------|-----|---------|
//! | `evaluate` | `style` | `aztec` |
//! | `evaluate` | `fanout` | `2` |
//! | `evaluate` | `max_leaves` | `10_000_000` |
//! | `select` | `fanouts` | `[2, 4, 8, 16]` |
//! | `select` | `metric` | `totalCommitmentBytes` |
//! | `sweep` | `fanouts` | `[2, 4, 8]` |
//! | `sweep` | `log_step` | `2` |
//!
//! A complete file:
//!
//! ```toml
//! [evaluate]
//! style = "zama"
//! fanout = 4
//!
//! [select]
//! fanouts = [2, 4, 8]
//! metric = "perProofBytes"
//!
//! [sweep]
//! log_step = 1
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::layout::Metric;
use crate::style::CommitmentStyle;
use crate::LayoutError;

/// Upper clamp applied to leaf counts of single evaluations.
pub const DEFAULT_MAX_LEAVES: u64 = 10_000_000;

/// Fanouts tried by the selector unless configured otherwise.
pub const DEFAULT_SELECT_FANOUTS: [u64; 4] = [2, 4, 8, 16];

/// Fanouts swept unless configured otherwise.
pub const DEFAULT_SWEEP_FANOUTS: [u64; 3] = [2, 4, 8];

/// Log2 distance between consecutive sweep leaf counts.
pub const DEFAULT_LOG_STEP: u32 = 2;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub evaluate: EvaluateConfig,
    pub select: SelectConfig,
    pub sweep: SweepConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluateConfig {
    pub style: CommitmentStyle,
    pub fanout: u64,
    pub max_leaves: u64,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            style: CommitmentStyle::Aztec,
            fanout: 2,
            max_leaves: DEFAULT_MAX_LEAVES,
        }
    }
}

impl EvaluateConfig {
    /// Clamps a requested leaf count into `1..=max_leaves`. Zero and negative
    /// requests become a single leaf.
    pub fn clamp_leaves(&self, leaves: i64) -> u64 {
        let requested = u64::try_from(leaves).unwrap_or(0);
        requested.clamp(1, self.max_leaves.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectConfig {
    pub fanouts: Vec<u64>,
    pub metric: Metric,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            fanouts: DEFAULT_SELECT_FANOUTS.to_vec(),
            metric: Metric::TotalCommitmentBytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub fanouts: Vec<u64>,
    pub log_step: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            fanouts: DEFAULT_SWEEP_FANOUTS.to_vec(),
            log_step: DEFAULT_LOG_STEP,
        }
    }
}

impl LayoutConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, LayoutError> {
        let config: LayoutConfig =
            toml::from_str(source).map_err(|err| LayoutError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, LayoutError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = fs::read_to_string(path)
            .map_err(|err| LayoutError::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        if self.evaluate.max_leaves == 0 {
            return Err(LayoutError::Config("evaluate.max_leaves must be > 0".into()));
        }
        if self.select.fanouts.is_empty() {
            return Err(LayoutError::Config("select.fanouts must not be empty".into()));
        }
        if self.sweep.fanouts.is_empty() {
            return Err(LayoutError::Config("sweep.fanouts must not be empty".into()));
        }
        if self.sweep.log_step == 0 {
            return Err(LayoutError::Config("sweep.log_step must be > 0".into()));
        }
        Ok(())
    }
}
