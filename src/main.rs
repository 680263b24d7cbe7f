use anyhow::{Context, Result};
use clap::Parser;

use stickerboard::cli::{Cli, Commands};
use stickerboard::config::{StaticConfig, get_config, init_config_from};
use stickerboard::runtime::modes::run_server;
use stickerboard::system::logging::init_logging;

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::GenerateConfig { output } => {
            match output {
                Some(path) => {
                    StaticConfig::default()
                        .save_to_file(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Sample configuration written to {}", path.display());
                }
                None => print!("{}", StaticConfig::generate_sample_config()?),
            }
            Ok(())
        }
        Commands::Serve => {
            if let Err(e) = init_config_from(cli.config.as_deref()) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            let config = get_config();

            // guard 必须存活到进程结束，保证日志落盘
            let _guard = init_logging(&config.logging)?;

            run_server(&config).await.inspect_err(|e| {
                tracing::error!("{:#}", e);
            })
        }
    }
}
