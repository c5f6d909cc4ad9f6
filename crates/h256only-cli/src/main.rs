//! h256only binary.
//!
//! Signs a JSON claims object or verifies a token, with the key read from a
//! file or stdin.
//!
//! ```text
//! echo '{"foo":"bar"}' | h256only --key secret.key sign - | h256only --key secret.key verify -
//! ```

mod key;
mod options;

use anyhow::{Context, Result, bail};
use clap::Parser;
use h256only::{MapClaims, Token};
use options::{Cli, Command};
use serde::Serialize;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.key == "-" && cli.command.input() == "-" {
        bail!("the key and the input cannot both be read from stdin");
    }

    match &cli.command {
        Command::Sign { claims } => sign_token(cli, claims),
        Command::Verify { token } => verify_token(cli, token),
    }
}

fn sign_token(cli: &Cli, claims: &str) -> Result<()> {
    let claims = key::read_input(claims)?;
    debug!(claims_len = claims.len(), "signing claims");

    let claims: MapClaims =
        serde_json::from_str(&claims).context("Couldn't parse claims JSON")?;
    let key = key::load_key(&cli.key).context("Couldn't read key")?;

    let token = Token::new_with_claims(claims)
        .signed_string(&key)
        .context("Error signing token")?;
    println!("{token}");
    Ok(())
}

fn verify_token(cli: &Cli, token: &str) -> Result<()> {
    let token = key::read_input(token)?;
    let token = token.trim();
    debug!(token_len = token.len(), "verifying token");

    let key = key::load_key(&cli.key).context("Couldn't read key")?;
    let token = h256only::parse(token, &key).context("Couldn't parse token")?;

    if cli.header {
        eprintln!("{}", to_json(token.header(), cli.compact)?);
    }
    println!(
        "{}",
        to_json(token.claims(), cli.compact).context("Failed to output claims")?
    );
    Ok(())
}

/// Compact, or indented with four spaces
fn to_json(value: &impl Serialize, compact: bool) -> Result<String> {
    if compact {
        return Ok(serde_json::to_string(value)?);
    }

    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
