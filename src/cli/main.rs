//! Command-line interface entry point for `reactionviz`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use reaction_network::config::Config;
use reaction_network::info;
use reaction_network::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::Path;

fn main() {
    let args = Cli::parse();

    // The stored config is what `config` edits and saves; overrides only
    // reach the effective config for this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI level already landed in config.logging.level; fall back to warn
    let mut level = config.logging.level.parse::<Level>().unwrap_or(Level::Warn);
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }
    set_level(level);

    let verbose = config.logging.verbose;
    if verbose {
        enable_verbose();
    }

    if !config.logging.file.is_empty() {
        let log_path = std::path::PathBuf::from(&config.logging.file);
        let display_path = log_path.to_string_lossy();
        if let Err(e) = ensure_log_dir(&log_path) {
            eprintln!("✗ {e}");
        }
        if init_file_logging(&log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Some(Command::Render(render_args)) => {
            commands::render::run(&render_args, &config);
        }
        None => {
            commands::render::run(&args::RenderArgs::default(), &config);
        }
    }
}

/// Create the directory a log file will live in
fn ensure_log_dir(log_path: &Path) -> Result<(), String> {
    match log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent)
            .map_err(|e| format!("Could not create log directory {}: {e}", parent.display())),
        None => Ok(()),
    }
}
