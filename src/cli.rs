//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stickerboard - server for the infinite sticker canvas
#[derive(Parser, Debug)]
#[command(name = "stickerboard")]
#[command(version)]
#[command(about = "Server for the infinite sticker canvas", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Write a sample configuration file with every default filled in
    GenerateConfig {
        /// Output path (default: stdout)
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_serve() {
        let cli = Cli::try_parse_from(["stickerboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli =
            Cli::try_parse_from(["stickerboard", "generate-config", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert_eq!(cli.command, Some(Commands::GenerateConfig { output: None }));
    }

    #[test]
    fn test_generate_config_output() {
        let cli = Cli::try_parse_from(["stickerboard", "generate-config", "out/sb.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::GenerateConfig {
                output: Some(PathBuf::from("out/sb.toml"))
            })
        );
    }
}
