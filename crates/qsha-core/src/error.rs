//! Error types for qsha.
//!
//! Every failure is terminal for the current digest computation: nothing is
//! retried internally and no partial digest is ever returned. Callers that
//! want a retry start a fresh computation with a fresh salt request.

use thiserror::Error;

/// Failure kinds surfaced by the digest engine and its collaborators.
#[derive(Error, Debug)]
pub enum QshaError {
    /// The randomness provider was unavailable, reported a failure, or
    /// returned a wrong-length or malformed bit string.
    #[error("randomness acquisition failed: {0}")]
    Randomness(String),

    /// The input message cannot be represented as bytes.
    #[error("message encoding error: {0}")]
    Encoding(String),

    /// A digest length other than 256 bits was requested.
    #[error("unsupported parameter: {0}")]
    UnsupportedParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let e = QshaError::Randomness("backend offline".into());
        assert_eq!(e.to_string(), "randomness acquisition failed: backend offline");

        let e = QshaError::UnsupportedParameter("bits=512".into());
        assert!(e.to_string().starts_with("unsupported parameter"));
    }
}
