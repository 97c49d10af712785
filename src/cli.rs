//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and rewrite TextMate-style `.tmTheme` color schemes.
#[derive(Debug, Parser)]
#[command(name = "schemer", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a scheme's name, identity, global colors, and rules.
    Inspect {
        /// Path to a .tmTheme file.
        file: PathBuf,
    },

    /// Round-trip a scheme through the model, normalizing key order and
    /// dropping invisible colors.
    Normalize {
        /// Path to a .tmTheme file.
        file: PathBuf,

        /// Write here instead of overwriting the input.
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },

    /// Write a fresh scheme with the default palette.
    New {
        /// Scheme name (also becomes the plist's `name` key).
        name: String,

        /// Destination file.
        #[arg(short = 'o', long = "out")]
        out: PathBuf,
    },
}
