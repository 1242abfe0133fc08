//! Doctor command implementation
//!
//! Checks system dependencies and configuration.

use anyhow::Result;
use colored::Colorize;
use etude_backend_engrave::{EngraveError, Engraver};
use std::env;
use std::process::{Command, ExitCode};

/// Run the doctor command
///
/// Checks:
/// - LilyPond installation
/// - Output directory permissions
/// - Version information
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run() -> Result<ExitCode> {
    println!("{}", "Etudes Doctor".cyan().bold());
    println!("{}", "=============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!(
        "  {} etude-cli v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    match get_rustc_version() {
        Some(version) => println!("  {} rustc {}", "->".green(), version),
        None => println!("  {} rustc (not found)", "->".yellow()),
    }

    println!();

    println!("{}", "Dependencies:".bold());
    match Engraver::new().version() {
        Ok(version) => {
            println!("  {} LilyPond {} (found)", "ok".green(), version);
        }
        Err(EngraveError::LilypondNotFound) => {
            println!("  {} LilyPond not found", "!!".red());
            println!(
                "     {}",
                "LilyPond is required for engraving sheets.".dimmed()
            );
            println!(
                "     {}",
                "Install from https://lilypond.org/download.html or set LILYPOND_PATH.".dimmed()
            );
            all_ok = false;
        }
        Err(e) => {
            println!("  {} LilyPond check failed: {}", "!!".red(), e);
            all_ok = false;
        }
    }

    println!();

    println!("{}", "Permissions:".bold());
    match env::current_dir() {
        Ok(dir) => {
            let test_file = dir.join(".etudes_write_test");
            match std::fs::write(&test_file, "test") {
                Ok(_) => {
                    let _ = std::fs::remove_file(&test_file);
                    println!(
                        "  {} Current directory is writable ({})",
                        "ok".green(),
                        dir.display()
                    );
                }
                Err(e) => {
                    println!("  {} Cannot write to current directory: {}", "!!".red(), e);
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("  {} Cannot determine current directory: {}", "!!".red(), e);
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("{} All checks passed", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} Some checks failed", "FAILED".red().bold());
        Ok(ExitCode::from(1))
    }
}

fn get_rustc_version() -> Option<String> {
    let output = Command::new("rustc").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .trim()
        .strip_prefix("rustc ")
        .map(|s| s.to_string())
        .or_else(|| Some(stdout.trim().to_string()))
}
