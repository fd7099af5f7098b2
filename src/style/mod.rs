//! Commitment style catalog.
//!
//! A style fixes the digest width used for every node of the commitment
//! tree. The catalog is static; [`CommitmentStyle`] is the only handle to it
//! and [`CommitmentStyle::profile`] returns the associated data.
//!
//! | Key | Display name | Hash bytes |
//! |-----|--------------|-----------|
//! | `aztec` | Aztec-style privacy rollup | 32 |
//! | `zama` | Zama-style FHE compute stack | 48 |
//! | `soundness` | Soundness-first protocol lab | 32 |

mod catalog;

pub use catalog::{AZTEC_PROFILE, SOUNDNESS_PROFILE, ZAMA_PROFILE};

use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Immutable description of a commitment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Lookup key, also used on the command line.
    pub key: &'static str,
    /// Human readable name.
    pub display_name: &'static str,
    /// Digest size of a single tree node in bytes.
    pub hash_bytes: u64,
    /// Free-form description.
    pub note: &'static str,
}

/// Supported commitment styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentStyle {
    /// Privacy rollup with 32-byte commitments.
    #[default]
    Aztec,
    /// FHE compute stack with 48-byte commitments.
    Zama,
    /// Conservative 32-byte commitments.
    Soundness,
}

impl CommitmentStyle {
    /// Catalog order used for listings and help output.
    pub const ALL: [CommitmentStyle; 3] = [
        CommitmentStyle::Aztec,
        CommitmentStyle::Zama,
        CommitmentStyle::Soundness,
    ];

    /// Returns the static profile bound to the style.
    pub const fn profile(self) -> &'static StyleProfile {
        match self {
            CommitmentStyle::Aztec => &AZTEC_PROFILE,
            CommitmentStyle::Zama => &ZAMA_PROFILE,
            CommitmentStyle::Soundness => &SOUNDNESS_PROFILE,
        }
    }

    pub const fn key(self) -> &'static str {
        self.profile().key
    }

    pub const fn hash_bytes(self) -> u64 {
        self.profile().hash_bytes
    }
}

impl fmt::Display for CommitmentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CommitmentStyle {
    type Err = LayoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CommitmentStyle::ALL
            .into_iter()
            .find(|style| style.key() == value)
            .ok_or_else(|| LayoutError::UnknownStyle(value.to_owned()))
    }
}
