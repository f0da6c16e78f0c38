use std::io::{IsTerminal, Read};

use log::info;

use qsha_core::{QshaError, SALT_BITS, qsha256};

pub struct HashCommandConfig<'a> {
    pub message: Option<&'a str>,
    pub bits: usize,
    pub provider: &'a str,
    pub salt_bits: Option<&'a str>,
    pub json: bool,
}

pub fn run(config: HashCommandConfig) -> i32 {
    match execute(&config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            super::exit_status(&e)
        }
    }
}

fn execute(config: &HashCommandConfig) -> Result<(), QshaError> {
    if config.bits != SALT_BITS {
        return Err(QshaError::UnsupportedParameter(format!(
            "only {SALT_BITS}-bit digests are supported, got {}",
            config.bits
        )));
    }

    let message = read_message(config.message)?;
    info!("hashing {} message byte(s)", message.len());

    let provider = super::resolve_provider(config.provider, config.salt_bits)?;
    let result = qsha256(&message, provider.as_ref())?;

    // Digest on stdout only; provenance and diagnostics on stderr, so the
    // digest stays pipeable.
    if config.json {
        let line = serde_json::to_string(&result)
            .map_err(|e| QshaError::Encoding(format!("serializing result: {e}")))?;
        println!("{line}");
    } else {
        println!("{}", result.digest);
    }
    eprintln!("Randomness source: {}", result.source);
    Ok(())
}

/// Message from the argument, or raw bytes from stdin when omitted.
fn read_message(arg: Option<&str>) -> Result<Vec<u8>, QshaError> {
    match arg {
        Some(s) => Ok(s.as_bytes().to_vec()),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter message (end with Ctrl+D):");
            }
            let mut buf = Vec::new();
            stdin
                .lock()
                .read_to_end(&mut buf)
                .map_err(|e| QshaError::Encoding(format!("reading stdin: {e}")))?;
            // Piped text usually carries one trailing newline that is not
            // part of the message.
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_message_passes_through_as_bytes() {
        assert_eq!(read_message(Some("abc")).unwrap(), b"abc");
        assert_eq!(read_message(Some("")).unwrap(), b"");
    }

    #[test]
    fn unsupported_bits_maps_to_its_exit_status() {
        let config = HashCommandConfig {
            message: Some("abc"),
            bits: 512,
            provider: "os_csprng",
            salt_bits: None,
            json: false,
        };
        assert_eq!(run(config), 2);
    }

    #[test]
    fn unknown_provider_maps_to_randomness_exit_status() {
        let config = HashCommandConfig {
            message: Some("abc"),
            bits: 256,
            provider: "nonexistent",
            salt_bits: None,
            json: false,
        };
        assert_eq!(run(config), 3);
    }

    #[test]
    fn fixed_salt_hash_succeeds() {
        let bits = "0".repeat(256);
        let config = HashCommandConfig {
            message: Some("abc"),
            bits: 256,
            provider: "os_csprng",
            salt_bits: Some(&bits),
            json: false,
        };
        assert_eq!(run(config), 0);
    }

    #[test]
    fn malformed_salt_bits_map_to_randomness_exit_status() {
        let config = HashCommandConfig {
            message: Some("abc"),
            bits: 256,
            provider: "os_csprng",
            salt_bits: Some("not-bits"),
            json: false,
        };
        assert_eq!(run(config), 3);
    }
}
