//! Vault - personal secret storage, one gpg-encrypted file per secret.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vault::cli::output;
use vault::cli::{execute, Cli};
use vault::config::Config;
use vault::error::Error;

fn main() {
    // Usage errors exit 1, not clap's default 2; --help/--version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing subscriber with env-filter support. Diagnostics go
    // to stderr so piped secret output stays clean.
    let filter = EnvFilter::try_from_env("VAULT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vault=debug")
        } else {
            EnvFilter::new("vault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = Config::from_env();

    if let Err(e) = execute(cli.command, &config) {
        let suggestion = match &e {
            Error::NotInitialized => Some("run: vault init <keyid>"),
            Error::NotFound(_) => Some("run: vault find"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
