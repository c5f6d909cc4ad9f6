use clap::{Parser, Subcommand};

/// Sign and verify h256only tokens
#[derive(Parser, Debug)]
#[command(name = "h256only", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the key file, or '-' to read the key from stdin
    ///
    /// The file holds the 32 raw key bytes or their 64-character hex encoding.
    #[arg(short, long, value_name = "PATH", env = "H256ONLY_KEY_FILE")]
    pub key: String,

    /// Print claims as a single line of JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log debug output to stderr (otherwise RUST_LOG applies)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Also print the token header to stderr when verifying
    #[arg(long, global = true)]
    pub header: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign a JSON claims object and print the token
    Sign {
        /// Claims as a JSON object, or '-' to read them from stdin
        #[arg(value_name = "CLAIMS")]
        claims: String,
    },
    /// Verify a token and print its claims
    Verify {
        /// The token, or '-' to read it from stdin
        #[arg(value_name = "TOKEN")]
        token: String,
    },
}

impl Command {
    /// The positional input, which may be '-'
    pub fn input(&self) -> &str {
        match self {
            Command::Sign { claims } => claims,
            Command::Verify { token } => token,
        }
    }
}
