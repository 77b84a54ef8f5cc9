//! # Probehunt - Parallel Probe-Pattern Hash Search
//!
//! Probehunt enumerates every concrete string a digit-range pattern can
//! produce and hunts, in parallel, for the one whose digest matches a
//! target hash. Typical use: recovering the plaintext behind a published
//! SHA-1 checksum of geocache coordinates like `N 5[d] 3[1,5].[d][d][d]`.
//!
//! ## Features
//!
//! - **Index-addressed enumeration**: any probe can be materialized from
//!   its linear index in O(placeholder count), without ever holding the
//!   probe space in memory
//! - **Splittable ranges**: the index domain divides recursively into
//!   disjoint sub-ranges, so workers scan with zero coordination beyond
//!   a cancellation flag
//! - **Pluggable digests**: SHA-1, SHA-256 or MD5 predicates, one context
//!   per worker
//!
//! ## Quick Start
//!
//! ```bash
//! # How big is the probe space?
//! probehunt count "N 5[d] 3[1,5].[d][d][d]"
//!
//! # Hunt for the probe behind a SHA-1 digest
//! probehunt search "N 5[d] 3[1,5].[d][d][d]" e09ce09149d8f14254ccfa3c4b1c6dc325734742
//! ```

pub mod cli;
pub mod error;
pub mod generator;
pub mod search;

pub use cli::{Cli, Output};
pub use error::GeneratorError;
pub use generator::{count, enumerate, ProbeSpace};

/// Result type alias for Probehunt operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
