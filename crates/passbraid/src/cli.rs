// src/cli.rs
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "passbraid",
    version,
    about = "Composes passwords from user-arranged generator fields"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Compose password(s) from the current arrangement
    Generate {
        /// Number of passwords to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
    },
    /// Append a new field to the arrangement
    Add {
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// Update the configuration of the field at INDEX
    Set {
        index: usize,
        /// Candidate word (repeatable); replaces the field's word list
        #[arg(long = "word", value_name = "WORD")]
        words: Vec<String>,
        /// New digit / character count
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        count: Option<u32>,
    },
    /// Remove the field at INDEX
    Remove { index: usize },
    /// Show the current arrangement
    Show,
    /// Help & tips for the three field kinds
    Tips,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum KindArg {
    Words,
    Digits,
    Characters,
}
