//! akvault CLI application.
//!
//! This binary provides a command-line interface for generating account
//! keypairs and revealing them in readable form. All cryptography lives
//! in the library; this layer only parses arguments, prompts for the
//! password, and formats output.

use akvault::error::{AkVaultError, Result};
use akvault::storage::identity::Identity;
use akvault::storage::keystore::{create_identity, reveal_identity};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "akvault")]
#[command(about = "Ed25519 account key vault", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a keypair and store it encrypted under a name
    Generate {
        /// Name for the new identity
        name: String,

        /// Directory to store the keys under
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Decrypt a stored identity and print its keys in readable formats
    Reveal {
        /// Name of the identity to reveal
        name: String,

        /// Directory where to look for keys
        #[arg(short, long, default_value = ".")]
        input: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { name, output } => {
            let identity = Identity::new(name, output);
            let password = prompt_password("Enter password to encrypt keys: ")?;

            create_identity(&identity, &password)?;

            println!("Wrote {}", identity.sign_key_path().display());
            println!("Wrote {}", identity.sign_key_pub_path().display());

            Ok(())
        }

        Commands::Reveal { name, input } => {
            let identity = Identity::new(name, input);
            let password = prompt_password("Enter password to decrypt keys: ")?;

            let revealed = reveal_identity(&identity, &password)?;

            println!("Private key (hex): {}", revealed.private_key_hex);
            println!("Public key (base check): {}", revealed.public_address);
            println!("Public key (hex): {}", revealed.public_key_hex);

            Ok(())
        }
    }
}

/// Prompt for a masked password, re-prompting while the input is empty.
fn prompt_password(prompt: &str) -> Result<String> {
    loop {
        let password = rpassword::prompt_password(prompt)
            .map_err(|e| AkVaultError::PasswordPrompt(e.to_string()))?;
        if !password.is_empty() {
            return Ok(password);
        }
        eprintln!("Password must not be empty.");
    }
}
