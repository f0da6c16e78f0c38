//! Deterministic randomness provider for tests and replay.
//!
//! Real hardware randomness cannot be pinned for conformance tests, so the
//! digest engine takes its provider as an injected capability and this
//! module supplies the deterministic stand-ins: a fixed bit string, the
//! all-zero sequence (which makes salt injection a no-op), and an
//! always-failing variant for exercising error paths.

use crate::error::QshaError;
use crate::provider::{Acquisition, ProviderInfo, RandomnessProvider};

static FIXED_INFO: ProviderInfo = ProviderInfo {
    name: "fixed",
    description: "Deterministic bit sequence supplied at construction",
    physics: "No physics: replays a caller-supplied bit string for reproducible \
              digests and conformance testing.",
};

enum Behavior {
    Bits(String),
    Zeros,
    Fail(String),
}

/// Provider that replays a predetermined bit sequence (or failure).
pub struct FixedBitProvider {
    behavior: Behavior,
}

impl FixedBitProvider {
    /// Always return the given bit string. Acquisition fails if the
    /// requested count does not match the stored length — the stored bits
    /// are never truncated or padded.
    pub fn new(bits: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Bits(bits.into()),
        }
    }

    /// Return an all-zero sequence of whatever length is requested. With a
    /// zero salt the digest equals stock SHA-256.
    pub fn zero() -> Self {
        Self {
            behavior: Behavior::Zeros,
        }
    }

    /// Always fail with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(reason.into()),
        }
    }
}

impl RandomnessProvider for FixedBitProvider {
    fn info(&self) -> &ProviderInfo {
        &FIXED_INFO
    }

    fn is_available(&self) -> bool {
        !matches!(self.behavior, Behavior::Fail(_))
    }

    fn acquire(&self, bit_count: usize) -> Result<Acquisition, QshaError> {
        match &self.behavior {
            Behavior::Zeros => Ok(Acquisition {
                bits: "0".repeat(bit_count),
                source: self.name().to_string(),
            }),
            Behavior::Bits(bits) => {
                if bits.len() != bit_count {
                    return Err(QshaError::Randomness(format!(
                        "fixed: holds {} bits, {bit_count} requested",
                        bits.len()
                    )));
                }
                Ok(Acquisition {
                    bits: bits.clone(),
                    source: self.name().to_string(),
                })
            }
            Behavior::Fail(reason) => Err(QshaError::Randomness(format!("fixed: {reason}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_returns_all_zero_bits() {
        let acq = FixedBitProvider::zero().acquire(256).unwrap();
        assert_eq!(acq.bits, "0".repeat(256));
        assert_eq!(acq.source, "fixed");
    }

    #[test]
    fn replays_stored_bits() {
        let bits = "10".repeat(128);
        let acq = FixedBitProvider::new(bits.clone()).acquire(256).unwrap();
        assert_eq!(acq.bits, bits);
    }

    #[test]
    fn length_mismatch_is_an_error_not_a_truncation() {
        let provider = FixedBitProvider::new("1010");
        assert!(provider.acquire(256).is_err());
        assert!(provider.acquire(4).is_ok());
    }

    #[test]
    fn failing_provider_reports_unavailable_and_errors() {
        let provider = FixedBitProvider::failing("no backend");
        assert!(!provider.is_available());
        let err = provider.acquire(256).unwrap_err();
        assert!(err.to_string().contains("no backend"));
    }
}
