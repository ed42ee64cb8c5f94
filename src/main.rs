//! stickerterm - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use stickerterm::model::AppError;
use tracing::info;

/// stickerterm - browse a sticker pack catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "stickerterm")]
#[command(version)]
#[command(about = "Browse sticker packs as ASCII-art thumbnails in the terminal")]
pub struct Args {
    /// Catalog directory or .zip archive holding packsinfo.json and one <id>.json per pack
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = stickerterm::config::load_config_with_precedence(args.config.clone())?;
        let merged = stickerterm::config::merge_config(config_file);
        let with_env = stickerterm::config::apply_env_overrides(merged);
        stickerterm::config::apply_cli_overrides(with_env, args.catalog, args.log_file)
    };

    stickerterm::logging::init(&config.log_file_path, &config.log_level)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let catalog = stickerterm::catalog::open(&config.catalog_dir)?;
    let code = stickerterm::transport::run_terminal_session(Arc::new(catalog))?;
    info!(code, "Exiting");

    Ok(())
}
