mod app;
mod config;
mod domain;
mod models;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gpui::{App, Application};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::models::GameModel;
use crate::ui::glyphs::DisplayStyle;

/// Chess board with an anchored pawn-promotion picker
#[derive(Parser, Debug)]
#[command(name = "gpui-chess")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Piece style for this session: standard, minimalist or modern
    #[arg(long)]
    style: Option<String>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let settings_path = args.settings.unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path).unwrap_or_else(|e| {
        tracing::warn!("{e:#}; using default settings");
        Settings::default()
    });

    let style = args
        .style
        .as_deref()
        .map(DisplayStyle::parse_lossy)
        .unwrap_or(settings.display_style);

    let game = match args.fen.as_deref() {
        Some(fen) => GameModel::from_fen(fen, style)?,
        None => GameModel::new(style),
    };

    tracing::info!(?style, settings = %settings_path.display(), "starting");

    Application::new().run(move |cx: &mut App| app::run(cx, game, settings_path));
    Ok(())
}
