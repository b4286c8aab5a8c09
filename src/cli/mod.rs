//! Command line interface.

mod print;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::assets::{DEFAULT_BOOTSTRAP_VERSION, DEFAULT_JQUERY_VERSION, DEFAULT_POPPER_VERSION};
use crate::config::AppConfig;

use print::{cmd_config, cmd_css, cmd_js, JsArgs};
use serve::cmd_serve;

#[derive(Parser)]
#[command(name = "bootstrap-assets")]
#[command(about = "Bootstrap CSS/JS references and bundled asset server")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true, env = "BOOTSTRAP_CONFIG")]
    config: Option<PathBuf>,

    /// Serve the bundled files instead of the CDN
    #[arg(long, global = true)]
    local: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo web server
    Serve {
        /// Bind address: a port, a host, or host:port
        #[arg(short, long, default_value = "127.0.0.1:5000")]
        bind: String,
    },

    /// Print the effective configuration as JSON
    Config,

    /// Print the Bootstrap stylesheet reference
    Css {
        /// Bootstrap version
        #[arg(long = "bootstrap-version", default_value = DEFAULT_BOOTSTRAP_VERSION)]
        version: String,
    },

    /// Print the jQuery, Bootstrap and Popper.js script references
    Js {
        /// Bootstrap version
        #[arg(long = "bootstrap-version", default_value = DEFAULT_BOOTSTRAP_VERSION)]
        version: String,
        /// jQuery version
        #[arg(long, default_value = DEFAULT_JQUERY_VERSION)]
        jquery_version: String,
        /// Popper.js version
        #[arg(long, default_value = DEFAULT_POPPER_VERSION)]
        popper_version: String,
        /// Leave out jQuery
        #[arg(long)]
        no_jquery: bool,
        /// Leave out Popper.js
        #[arg(long)]
        no_popper: bool,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).await?;
    if cli.local {
        config.bootstrap_serve_local = Some(true);
    }

    match cli.command {
        Commands::Serve { bind } => cmd_serve(config, &bind).await,
        Commands::Config => cmd_config(&config),
        Commands::Css { version } => cmd_css(&config, &version),
        Commands::Js {
            version,
            jquery_version,
            popper_version,
            no_jquery,
            no_popper,
        } => cmd_js(
            &config,
            JsArgs {
                version,
                jquery_version,
                popper_version,
                with_jquery: !no_jquery,
                with_popper: !no_popper,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_command_takes_global_flags() {
        let cli = Cli::try_parse_from(["bootstrap-assets", "config", "--local"]).unwrap();
        assert!(cli.local);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn test_js_flags() {
        let cli = Cli::try_parse_from([
            "bootstrap-assets",
            "js",
            "--bootstrap-version",
            "4.0.0",
            "--no-popper",
            "--local",
        ])
        .unwrap();

        assert!(cli.local);
        match cli.command {
            Commands::Js {
                version,
                jquery_version,
                no_jquery,
                no_popper,
                ..
            } => {
                assert_eq!(version, "4.0.0");
                assert_eq!(jquery_version, DEFAULT_JQUERY_VERSION);
                assert!(!no_jquery);
                assert!(no_popper);
            }
            _ => panic!("expected js command"),
        }
    }
}
