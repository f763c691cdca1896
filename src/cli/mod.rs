//! `foobar` command line: env file maintenance and service start.

pub mod env_file;
pub mod secret;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::{load_env_file, parse_bool, Config, DbDriver};
use crate::error::AppError;
use crate::server;

pub use env_file::{edit_key, EnvFile};
pub use secret::generate_secret;

#[derive(Debug, Parser)]
#[command(name = "foobar", version, about = "Foobar CRUD service over HTTP and RPC")]
pub struct Cli {
    /// Env file read by web-start and edited by the other commands.
    #[arg(long, global = true, default_value = ".env")]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the database driver (DB_DRIVER and TEST_DB_DRIVER).
    Database { driver: DbDriver },
    /// Turn SQL statement logging on or off (DEBUG).
    SwitchDebug {
        #[arg(value_parser = parse_debug_flag, action = ArgAction::Set)]
        value: bool,
    },
    /// Generate a random SECRET with the given total length, digit count and symbol count.
    GenerateSecretKey {
        length: usize,
        digits: usize,
        symbols: usize,
    },
    /// Connect to the database and serve HTTP and RPC.
    WebStart,
}

fn parse_debug_flag(s: &str) -> Result<bool, String> {
    parse_bool(s).ok_or_else(|| format!("only true and false are allowed, got '{}'", s))
}

fn report(key: &str, change: (Option<String>, String)) {
    let (previous, new) = change;
    println!("last {} value {}", key, previous.unwrap_or_default());
    println!("{} switched to {}", key, new);
}

pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let env_file = cli.env_file;
    match cli.command {
        Command::Database { driver } => {
            for key in ["DB_DRIVER", "TEST_DB_DRIVER"] {
                report(key, edit_key(&env_file, key, driver.as_str())?);
            }
        }
        Command::SwitchDebug { value } => {
            report("DEBUG", edit_key(&env_file, "DEBUG", &value.to_string())?);
        }
        Command::GenerateSecretKey { length, digits, symbols } => {
            let secret = generate_secret(length, digits, symbols)?;
            let change = edit_key(&env_file, "SECRET", &secret)?;
            println!(
                "SECRET generated with combination {} chars, {} nums, {} syms",
                length, digits, symbols
            );
            report("SECRET", change);
        }
        Command::WebStart => {
            if !load_env_file(&env_file)? {
                tracing::warn!(path = %env_file.display(), "env file not found, using process environment");
            }
            let config = Config::from_env()?;
            server::run(config).await?;
        }
    }
    Ok(())
}
