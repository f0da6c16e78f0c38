//! OS CSPRNG randomness provider.
//!
//! The kernel entropy pool is seeded from interrupt timing, device noise,
//! and hardware RNG instructions where present, then expanded by a
//! cryptographic DRBG. Always available; the baseline provider for
//! non-reproducible digests.

use crate::error::QshaError;
use crate::provider::{Acquisition, ProviderInfo, RandomnessProvider, bytes_to_bits};

static OS_ENTROPY_INFO: ProviderInfo = ProviderInfo {
    name: "os_csprng",
    description: "Operating system CSPRNG via getrandom(2)",
    physics: "Kernel entropy pool seeded from interrupt timing, device noise, and \
              hardware RNG instructions (RDRAND/RNDR) where available, expanded by \
              a cryptographically secure DRBG.",
};

/// Randomness provider backed by the operating system CSPRNG.
#[derive(Debug, Default)]
pub struct OsEntropyProvider;

impl OsEntropyProvider {
    pub fn new() -> Self {
        Self
    }
}

impl RandomnessProvider for OsEntropyProvider {
    fn info(&self) -> &ProviderInfo {
        &OS_ENTROPY_INFO
    }

    fn is_available(&self) -> bool {
        true
    }

    fn acquire(&self, bit_count: usize) -> Result<Acquisition, QshaError> {
        let mut buf = vec![0u8; bit_count.div_ceil(8)];
        getrandom::fill(&mut buf)
            .map_err(|e| QshaError::Randomness(format!("os_csprng: {e}")))?;
        Ok(Acquisition {
            bits: bytes_to_bits(&buf, bit_count),
            source: self.name().to_string(),
        })
    }
}
