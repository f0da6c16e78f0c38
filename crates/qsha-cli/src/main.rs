//! CLI for qsha — quantum-salted SHA-256 digests.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qsha")]
#[command(about = "qsha — quantum-salted SHA-256 digests")]
#[command(version = qsha_core::VERSION)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a quantum-salted SHA-256 digest
    Hash {
        /// Message string to hash. Reads standard input when omitted.
        message: Option<String>,

        /// Digest length in bits. Only 256 is supported.
        #[arg(long, default_value = "256")]
        bits: usize,

        /// Randomness provider for the salt
        #[arg(long, default_value = "os_csprng")]
        provider: String,

        /// Fixed 256-bit salt ('0'/'1' string) for deterministic replay;
        /// overrides --provider
        #[arg(long)]
        salt_bits: Option<String>,

        /// Write the result as JSON ({"digest": ..., "source": ...})
        #[arg(long)]
        json: bool,
    },

    /// List built-in randomness providers available on this machine
    Providers,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let status = match cli.command {
        Commands::Hash {
            message,
            bits,
            provider,
            salt_bits,
            json,
        } => commands::hash::run(commands::hash::HashCommandConfig {
            message: message.as_deref(),
            bits,
            provider: &provider,
            salt_bits: salt_bits.as_deref(),
            json,
        }),
        Commands::Providers => commands::providers::run(),
    };
    std::process::exit(status);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
