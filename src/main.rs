//! Flutterstrap - Flutter sandbox bootstrapper
//!
//! A command line tool that brings a fresh Linux sandbox to a state where a
//! Web/Linux-desktop-only Flutter SDK is installed, configured, and verified.
//! Mobile targets (Android, iOS) are disabled; OS-level build dependencies are
//! installed through the system package manager on a best-effort basis.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod git;
mod launcher;
mod progress;
mod report;
mod sandbox;
mod step;
mod steps;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup(args) => commands::setup::run(cli.verbose, args),
        Commands::Doctor(args) => commands::doctor::run(cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        ui::error(&e.to_string());
        std::process::exit(1);
    }
}
