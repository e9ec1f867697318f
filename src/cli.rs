// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - apply: render the theme script for a host
// - export: write the theme as TOML or VHS JSON
// - list / show: inspect available themes
// - config --show | --path | --reset: configuration management

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use termtheme::config::{Config, VERSION};
use termtheme::hosts::{self, Host};
use termtheme::theme::{ThemeDescriptor, ThemeFile};

/// termtheme - terminal color themes for hterm and Blink Shell
#[derive(Parser, Debug)]
#[command(name = "termtheme")]
#[command(version = VERSION)]
#[command(about = "Apply color themes to hterm and Blink Shell", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the theme script for a host terminal
    Apply {
        /// Theme name (defaults to the configured theme)
        #[arg(long)]
        theme: Option<String>,

        /// Host terminal: hterm, secure-shell, blink
        #[arg(long)]
        host: Option<Host>,

        /// Write the script here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Export a theme document
    Export {
        /// Theme name (defaults to the configured theme)
        #[arg(long)]
        theme: Option<String>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Toml)]
        format: ExportFormat,
    },

    /// List available themes
    List,

    /// Print every color in a theme
    Show {
        /// Theme name (defaults to the configured theme)
        #[arg(long)]
        theme: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// termtheme TOML document
    Toml,
    /// VHS / iTerm2-Color-Schemes JSON
    Vhs,
}

impl Cli {
    /// Commands that must keep working when the config file is broken
    pub fn tolerates_broken_config(&self) -> bool {
        matches!(
            self.command,
            Commands::Config { reset: true, .. } | Commands::Config { path: true, .. }
        )
    }
}

/// Run a parsed command against the loaded config
pub fn run(cli: Cli, config: &Config, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Apply {
            theme,
            host,
            output,
        } => handle_apply(config, theme, host, output, out),
        Commands::Export { theme, format } => handle_export(config, theme, format, out),
        Commands::List => handle_list(config, out),
        Commands::Show { theme } => handle_show(config, theme, out),
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path(out)
            } else if show {
                handle_config_show(config, out)
            } else if reset {
                handle_config_reset(out)
            } else {
                // No flag provided, show help
                writeln!(out, "Usage: termtheme config [--show|--reset|--path]")?;
                writeln!(out)?;
                writeln!(out, "Options:")?;
                writeln!(out, "  --show    Display effective configuration")?;
                writeln!(out, "  --reset   Reset config file to defaults")?;
                writeln!(out, "  --path    Show config file path")?;
                Ok(())
            }
        }
    }
}

fn load_theme(config: &Config, name: Option<String>) -> Result<ThemeDescriptor> {
    let name = name.unwrap_or_else(|| config.theme.clone());
    config
        .catalog()
        .load(&name)
        .with_context(|| format!("loading theme '{}'", name))
}

fn handle_apply(
    config: &Config,
    theme: Option<String>,
    host: Option<Host>,
    output: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<()> {
    let theme = load_theme(config, theme)?;
    let host = host.unwrap_or(config.host);
    let script = hosts::render_with_receiver(host, &theme, &config.hterm_receiver)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &script)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), host = %host, "wrote theme script");
            writeln!(out, "Wrote {} theme for {} to {}", theme.name(), host, path.display())?;
        }
        None => out.write_all(script.as_bytes())?,
    }
    Ok(())
}

fn handle_export(
    config: &Config,
    theme: Option<String>,
    format: ExportFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let theme = load_theme(config, theme)?;
    match format {
        ExportFormat::Toml => out.write_all(ThemeFile::from_descriptor(&theme).to_toml().as_bytes())?,
        ExportFormat::Vhs => writeln!(out, "{}", theme.to_vhs_json())?,
    }
    Ok(())
}

fn handle_list(config: &Config, out: &mut dyn Write) -> Result<()> {
    for name in config.catalog().list_available() {
        let marker = if name.eq_ignore_ascii_case(&config.theme) {
            "*"
        } else {
            " "
        };
        writeln!(out, "{} {}", marker, name)?;
    }
    Ok(())
}

fn handle_show(config: &Config, theme: Option<String>, out: &mut dyn Write) -> Result<()> {
    let theme = load_theme(config, theme)?;

    writeln!(out, "{}", theme.name())?;
    writeln!(out)?;
    for (slot, color) in theme.palette().iter() {
        writeln!(out, "{:>2}  {:<15} {}", slot.index(), slot.name(), color)?;
    }
    writeln!(out)?;
    writeln!(out, "    {:<15} {}", "foreground", theme.foreground())?;
    writeln!(out, "    {:<15} {}", "background", theme.background())?;
    writeln!(out, "    {:<15} {}", "cursor", theme.cursor())?;
    if let Some(selection) = theme.selection() {
        writeln!(out, "    {:<15} {}", "selection", selection)?;
    }
    Ok(())
}

fn handle_config_path(out: &mut dyn Write) -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("could not determine config path");
    };
    writeln!(out, "{}", path.display())?;
    Ok(())
}

fn handle_config_show(config: &Config, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "# Effective configuration (env > file > defaults)")?;
    writeln!(out)?;
    out.write_all(config.to_toml().as_bytes())?;

    // Show source info
    writeln!(out)?;
    if let Some(path) = Config::config_path() {
        if path.exists() {
            writeln!(out, "# Source: {}", path.display())?;
        } else {
            writeln!(out, "# Source: defaults (no config file)")?;
        }
    }
    Ok(())
}

fn handle_config_reset(out: &mut dyn Write) -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("could not determine config path");
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            writeln!(out, "Aborted.")?;
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("writing {}", path.display()))?;

    writeln!(out, "Config reset to defaults: {}", path.display())?;
    Ok(())
}
