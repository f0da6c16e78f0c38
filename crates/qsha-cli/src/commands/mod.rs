pub mod hash;
pub mod providers;

use qsha_core::{FixedBitProvider, QshaError, RandomnessProvider};

/// Map each failure kind to its distinct nonzero exit status.
pub fn exit_status(err: &QshaError) -> i32 {
    match err {
        QshaError::UnsupportedParameter(_) => 2,
        QshaError::Randomness(_) => 3,
        QshaError::Encoding(_) => 4,
    }
}

/// Resolve the salt provider for a hash invocation.
///
/// A `--salt-bits` string takes precedence and yields a deterministic
/// replay provider; otherwise the named built-in provider is looked up.
pub fn resolve_provider(
    name: &str,
    salt_bits: Option<&str>,
) -> Result<Box<dyn RandomnessProvider>, QshaError> {
    if let Some(bits) = salt_bits {
        return Ok(Box::new(FixedBitProvider::new(bits)));
    }
    qsha_core::by_name(name).ok_or_else(|| {
        QshaError::Randomness(format!(
            "unknown provider '{name}' (see `qsha providers`)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_statuses_are_distinct_and_nonzero() {
        let statuses = [
            exit_status(&QshaError::UnsupportedParameter(String::new())),
            exit_status(&QshaError::Randomness(String::new())),
            exit_status(&QshaError::Encoding(String::new())),
        ];
        for (i, a) in statuses.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &statuses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn resolve_provider_by_name() {
        let provider = resolve_provider("os_csprng", None).unwrap();
        assert_eq!(provider.name(), "os_csprng");
    }

    #[test]
    fn resolve_provider_unknown_name_errors() {
        assert!(resolve_provider("nope", None).is_err());
    }

    #[test]
    fn salt_bits_override_the_named_provider() {
        let bits = "0".repeat(256);
        let provider = resolve_provider("os_csprng", Some(&bits)).unwrap();
        assert_eq!(provider.name(), "fixed");
        assert_eq!(provider.acquire(256).unwrap().bits, bits);
    }
}
