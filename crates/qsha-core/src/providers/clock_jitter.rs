//! Clock jitter randomness provider.
//!
//! Samples nanosecond-scale timing variation of small memory-touching work
//! loops. The duration of each loop is perturbed by oscillator phase noise,
//! DRAM refresh collisions, and scheduler preemption; the differences
//! between consecutive timings carry the unpredictable component. Raw
//! deltas are biased and correlated, so the provider conditions them with
//! chained SHA-256 before emitting bits.

use std::time::Instant;

use log::debug;
use sha2::{Digest, Sha256};

use crate::error::QshaError;
use crate::provider::{Acquisition, ProviderInfo, RandomnessProvider, bytes_to_bits};

/// Raw timing samples gathered per conditioned output byte.
const SAMPLES_PER_BYTE: usize = 32;

static CLOCK_JITTER_INFO: ProviderInfo = ProviderInfo {
    name: "clock_jitter",
    description: "CPU timing jitter, SHA-256 conditioned",
    physics: "Consecutive timings of identical work loops differ by oscillator phase \
              noise, DRAM refresh collisions, and scheduler preemption. The timing \
              deltas are unpredictable at nanosecond resolution; chained SHA-256 \
              conditioning removes their bias and correlation.",
};

/// Randomness provider harvesting CPU timing jitter.
#[derive(Debug, Default)]
pub struct ClockJitterProvider;

impl ClockJitterProvider {
    pub fn new() -> Self {
        Self
    }
}

/// Time `n` identical work loops and return the deltas between consecutive
/// timings, truncated to their low byte (where the jitter lives).
fn sample_timing_deltas(n: usize) -> Vec<u8> {
    let mut timings: Vec<u64> = Vec::with_capacity(n + 1);
    let mut sink = 0x9e37_79b9_7f4a_7c15u64;

    for i in 0..=n {
        let start = Instant::now();
        for j in 0..64u64 {
            sink = sink.wrapping_mul(0x5851_f42d_4c95_7f2d).wrapping_add(i as u64 ^ j);
        }
        std::hint::black_box(sink);
        timings.push(start.elapsed().as_nanos() as u64);
    }

    timings
        .windows(2)
        .map(|w| w[1].abs_diff(w[0]) as u8)
        .collect()
}

/// Chained SHA-256 conditioning: each 32-byte output block is
/// SHA-256(state || chunk || counter), with state carried from the
/// previous block.
fn condition(raw: &[u8], n_output: usize) -> Vec<u8> {
    let mut output = Vec::with_capacity(n_output);
    let mut state = [0u8; 32];
    let mut counter: u64 = 0;
    for chunk in raw.chunks(64) {
        if output.len() >= n_output {
            break;
        }
        let mut h = Sha256::new();
        h.update(state);
        h.update(chunk);
        h.update(counter.to_le_bytes());
        state = h.finalize().into();
        output.extend_from_slice(&state);
        counter += 1;
    }
    output.truncate(n_output);
    output
}

impl RandomnessProvider for ClockJitterProvider {
    fn info(&self) -> &ProviderInfo {
        &CLOCK_JITTER_INFO
    }

    fn is_available(&self) -> bool {
        // Timing loops run anywhere; usefulness depends only on the clock
        // resolution checked at acquire time.
        true
    }

    fn acquire(&self, bit_count: usize) -> Result<Acquisition, QshaError> {
        let n_bytes = bit_count.div_ceil(8);
        let raw = sample_timing_deltas(n_bytes * SAMPLES_PER_BYTE);
        debug!("clock_jitter: sampled {} timing deltas", raw.len());

        // A clock too coarse to resolve the work loop produces constant
        // deltas, which carry no entropy.
        if raw.windows(2).all(|w| w[0] == w[1]) {
            return Err(QshaError::Randomness(
                "clock_jitter: timing samples show no variation".to_string(),
            ));
        }

        let conditioned = condition(&raw, n_bytes);
        if conditioned.len() < n_bytes {
            return Err(QshaError::Randomness(format!(
                "clock_jitter: conditioned {} bytes, needed {n_bytes}",
                conditioned.len()
            )));
        }

        Ok(Acquisition {
            bits: bytes_to_bits(&conditioned, bit_count),
            source: self.name().to_string(),
        })
    }
}
