//! # qsha-core
//!
//! **Quantum-salted SHA-256.**
//!
//! `qsha-core` computes a variant of SHA-256 whose eight initial hash words
//! are XOR-perturbed by 256 bits of externally supplied randomness before
//! the standard compression rounds run. Padding, the message schedule, and
//! the 64 rounds are unmodified FIPS 180-4, so an all-zero salt reproduces
//! stock SHA-256 exactly.
//!
//! ## Quick Start
//!
//! ```
//! use qsha_core::{FixedBitProvider, qsha256};
//!
//! // Zero salt makes the injection a no-op: stock SHA-256.
//! let result = qsha256(b"abc", &FixedBitProvider::zero()).unwrap();
//! assert_eq!(
//!     result.digest,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! assert_eq!(result.source, "fixed");
//! ```
//!
//! With a live provider every digest is salted with fresh randomness:
//!
//! ```
//! use qsha_core::{OsEntropyProvider, qsha256};
//!
//! let result = qsha256(b"abc", &OsEntropyProvider::new()).unwrap();
//! assert_eq!(result.digest.len(), 64);
//! assert_eq!(result.source, "os_csprng");
//! ```
//!
//! ## Architecture
//!
//! Provider → 256-bit salt → XOR into initial state → pad → compress → hex
//!
//! Every salt source implements the [`RandomnessProvider`] trait; the
//! engine consults it exactly once per digest computation and propagates
//! its provenance label into the result. A provider failure, wrong-length
//! response, or malformed bit string is a hard [`QshaError::Randomness`] —
//! never a silent truncation.

pub mod digest;
pub mod error;
pub mod provider;
pub mod providers;
pub mod salt;

pub use digest::{SaltedDigest, pad_message, qsha256, qsha256_with_salt};
pub use error::QshaError;
pub use provider::{Acquisition, ProviderInfo, RandomnessProvider, bytes_to_bits};
pub use providers::{
    ClockJitterProvider, FixedBitProvider, OsEntropyProvider, by_name,
    detect_available_providers,
};
pub use salt::{SALT_BITS, SALT_WORDS, Salt};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
