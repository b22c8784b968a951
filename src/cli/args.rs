//! CLI argument definitions using clap
//!
//! Commands:
//! - invoice-fields check --config <path>
//! - invoice-fields fields --config <path>
//! - invoice-fields validate --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Invoice field-schema compiler and validator
#[derive(Parser, Debug)]
#[command(name = "invoice-fields")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the stored invoice configuration as the back-office would on save
    Check {
        /// Path to shop settings file
        #[arg(long, default_value = "./shop.json")]
        config: PathBuf,
    },

    /// Print the compiled checkout field list
    Fields {
        /// Path to shop settings file
        #[arg(long, default_value = "./shop.json")]
        config: PathBuf,
    },

    /// Validate one JSON object of submitted invoice values read from stdin
    Validate {
        /// Path to shop settings file
        #[arg(long, default_value = "./shop.json")]
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
