// termtheme - terminal color themes for hterm and Blink Shell
//
// Loads a theme by name (user themes dir, then bundled), and renders it into
// the script the chosen host terminal loads. See lib.rs for the library side.

mod cli;

use anyhow::Result;
use clap::Parser;
use termtheme::config::Config;
use termtheme::logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // A broken config is fatal, except for the commands that repair it
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if cli.tolerates_broken_config() => {
            eprintln!("Warning: {e}");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    logging::init(&config.logging);

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    if config.extract_bundled {
        if let Err(e) = config.catalog().ensure_extracted() {
            // Bundled themes still load from the binary
            tracing::warn!(error = %e, "could not extract bundled themes");
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(cli, &config, &mut out)
}
