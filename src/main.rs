//! Regionboard windowed editor.
//!
//! Usage: `regionboard [BACKGROUND_IMAGE]`. Without an argument the
//! `background` entry of the settings file is used.

use anyhow::{Context as _, Result};
use regionboard::background::BackgroundImage;
use regionboard::constants::DEFAULT_WINDOW_SIZE;
use regionboard::persistence::FileStore;
use regionboard::session::EditorSession;
use regionboard::settings::Settings;
use regionboard::types::Vec2;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("regionboard=info")),
        )
        .init();

    let settings = Settings::load();

    let background_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.background.clone())
        .context("no background image given (pass a path or set \"background\" in settings.json)")?;
    let background = BackgroundImage::probe(&background_path)
        .with_context(|| format!("failed to read background image {}", background_path.display()))?;

    let storage_dir = settings
        .storage_dir
        .clone()
        .or_else(FileStore::default_dir)
        .context("no data directory available for saved regions")?;
    let store = FileStore::open(&storage_dir)
        .with_context(|| format!("failed to open region store at {}", storage_dir.display()))?;
    tracing::info!(dir = %storage_dir.display(), "region store");

    let (width, height) = DEFAULT_WINDOW_SIZE;
    let session = EditorSession::for_background(
        &background,
        Vec2::new(width, height),
        Box::new(store),
        settings,
    );

    regionboard::app::run(session, background);
    Ok(())
}
