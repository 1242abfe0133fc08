//! Etudes CLI - Random sight-reading exercise generation
//!
//! This binary provides commands for validating etude specs, engraving
//! them into sheet images, and rendering them to audio.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use etude_cli::commands;

/// Etudes - Random Sight-Reading Exercise Generator
#[derive(Parser)]
#[command(name = "etude")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and engrave an etude from a spec file
    Generate {
        /// Path to the spec JSON file
        #[arg(short, long)]
        spec: String,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Override the sheet format (png, pdf, svg)
        #[arg(long, value_parser = ["png", "pdf", "svg"])]
        format: Option<String>,

        /// Override the spec seed for a fresh realization
        #[arg(long)]
        seed: Option<u32>,

        /// Open the rendered sheet with the system viewer
        #[arg(long)]
        open: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate an etude and render it to a WAV file
    Play {
        /// Path to the spec JSON file (output format must be wav)
        #[arg(short, long)]
        spec: String,

        /// Output root directory (default: current directory)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Override the spec seed for a fresh realization
        #[arg(long)]
        seed: Option<u32>,

        /// Open the rendered audio with the system player
        #[arg(long)]
        open: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a spec file without generating anything
    Validate {
        /// Path to the spec JSON file
        #[arg(short, long)]
        spec: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write a starter spec to a file or stdout
    Template {
        /// Destination path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check system dependencies and configuration
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            spec,
            out_root,
            format,
            seed,
            open,
            json,
        } => commands::generate::run(
            &spec,
            out_root.as_deref(),
            format.as_deref(),
            seed,
            open,
            json,
        ),
        Commands::Play {
            spec,
            out_root,
            seed,
            open,
            json,
        } => commands::play::run(&spec, out_root.as_deref(), seed, open, json),
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Template { output } => commands::template::run(output.as_deref()),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}
