//! Digest predicate
//!
//! The enumeration core is hash-agnostic; this module supplies the concrete
//! predicate: hash the probe with the selected algorithm, hex-encode, compare
//! against the target. Digest computation holds no shared state, so every
//! worker calls it independently.

use anyhow::{bail, Result};
use clap::ValueEnum;
use md5::Md5;
use sha1::{Digest, Sha1};
use sha2::Sha256;

/// Supported digest algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
    Md5,
}

impl DigestAlgorithm {
    /// Length of the hex-encoded digest.
    pub fn hex_len(&self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 40,
            DigestAlgorithm::Sha256 => 64,
            DigestAlgorithm::Md5 => 32,
        }
    }

    /// Hex-encoded digest of a probe.
    pub fn hex_digest(&self, probe: &str) -> String {
        match self {
            DigestAlgorithm::Sha1 => hex::encode(Sha1::digest(probe.as_bytes())),
            DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(probe.as_bytes())),
            DigestAlgorithm::Md5 => hex::encode(Md5::digest(probe.as_bytes())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Md5 => "md5",
        }
    }
}

/// A validated target digest to hunt for.
#[derive(Debug, Clone)]
pub struct TargetDigest {
    algorithm: DigestAlgorithm,
    hex: String,
}

impl TargetDigest {
    /// Validate the target up front so a typo fails before any enumeration
    /// starts, not after scanning the whole domain.
    pub fn new(algorithm: DigestAlgorithm, target: &str) -> Result<Self> {
        let hex = target.to_ascii_lowercase();
        if hex.len() != algorithm.hex_len() {
            bail!(
                "target digest has {} hex chars, {} requires {}",
                hex.len(),
                algorithm.name(),
                algorithm.hex_len()
            );
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("target digest is not a hex string: '{}'", target);
        }
        Ok(Self { algorithm, hex })
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// True when the probe's digest equals the target.
    pub fn matches(&self, probe: &str) -> bool {
        self.algorithm.hex_digest(probe) == self.hex
    }
}
