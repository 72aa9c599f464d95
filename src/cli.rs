// CLI module - command-line argument parsing and handlers
//
// Provides subcommands for configuration management and headless inspection:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --update: Merge new defaults into existing config
// - report: Print the sitemap build report and exit

use crate::config::{Config, VERSION};
use crate::nav::Sitemap;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Viewdeck - routed admin console for the terminal
#[derive(Parser)]
#[command(name = "viewdeck")]
#[command(version = VERSION)]
#[command(about = "Routed admin console for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Update config with new defaults (preserves user values)
        #[arg(long)]
        update: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Print the sitemap build report
    Report,
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            update,
            path,
        }) => {
            if path {
                config_path().map(|p| println!("{}", p.display()))
            } else if show {
                show_config()
            } else if reset {
                reset_config()
            } else if edit {
                edit_config()
            } else if update {
                update_config()
            } else {
                print_config_usage();
                Ok(())
            }
        }
        Some(Commands::Report) => print_report(),
        None => return false, // No subcommand, run the console
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    true
}

fn config_path() -> Result<PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn print_config_usage() {
    println!("Usage: viewdeck config [--show|--reset|--edit|--update|--path]");
    println!();
    println!("Options:");
    println!("  --show    Display effective configuration");
    println!("  --reset   Reset config file to defaults");
    println!("  --edit    Open config file in $EDITOR");
    println!("  --update  Update config with new defaults (preserves user values)");
    println!("  --path    Show config file path");
}

fn show_config() -> Result<()> {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!("locale = {:?}", config.locale);
    match &config.start_route {
        Some(route) => println!("start_route = {:?}", route),
        None => println!("# start_route unset (saved session or home)"),
    }
    println!("tick_ms = {}", config.tick_ms);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);
    println!();
    println!("[session]");
    println!("enabled = {}", config.session.enabled);
    println!("path = {:?}", config.session.path.display().to_string());

    println!();
    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn reset_config() -> Result<()> {
    let path = config_path()?;

    // An existing file is only overwritten after confirmation.
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().ok();

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    write_config_file(&path, &Config::default().to_toml())?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn edit_config() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;
    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

fn update_config() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        // No existing config, just create default
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
        return Ok(());
    }

    // Re-serialize the effective config so new fields appear with their
    // defaults while the user's values carry over.
    let updated = Config::from_env().to_toml();

    let backup_path = path.with_extension("toml.bak");
    match std::fs::copy(&path, &backup_path) {
        Ok(_) => println!("Backup created: {}", backup_path.display()),
        Err(e) => eprintln!("Warning: Could not create backup: {}", e),
    }

    write_config_file(&path, &updated)?;
    println!("Config updated with latest structure: {}", path.display());
    println!("Your values have been preserved.");
    Ok(())
}

fn write_config_file(path: &std::path::Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}

fn print_report() -> Result<()> {
    let sitemap = Sitemap::standard().context("Failed to build sitemap")?;
    for line in sitemap.build_report() {
        println!("{}", line);
    }
    Ok(())
}
