//! Built-in randomness providers.
//!
//! Each provider implements [`RandomnessProvider`](crate::provider::RandomnessProvider)
//! and declares its own provenance label. The digest engine treats them all
//! identically; the CLI selects one by name.

pub mod clock_jitter;
pub mod fixed;
pub mod os_entropy;

pub use clock_jitter::ClockJitterProvider;
pub use fixed::FixedBitProvider;
pub use os_entropy::OsEntropyProvider;

use crate::provider::RandomnessProvider;

/// All built-in providers that can operate on this machine.
///
/// The deterministic [`FixedBitProvider`] is deliberately excluded: it is a
/// test/replay tool, constructed explicitly rather than discovered.
pub fn detect_available_providers() -> Vec<Box<dyn RandomnessProvider>> {
    let all: Vec<Box<dyn RandomnessProvider>> = vec![
        Box::new(OsEntropyProvider::new()),
        Box::new(ClockJitterProvider::new()),
    ];
    all.into_iter().filter(|p| p.is_available()).collect()
}

/// Look up an available provider by its exact name.
pub fn by_name(name: &str) -> Option<Box<dyn RandomnessProvider>> {
    detect_available_providers()
        .into_iter()
        .find(|p| p.name() == name)
}
