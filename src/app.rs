//! Application setup and window creation.

use std::path::PathBuf;

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::models::GameModel;
use crate::ui::views::{ChessBoardView, bind_keys};

/// Initialize and run the chess application
pub fn run(cx: &mut App, game: GameModel, settings_path: PathBuf) {
    gpui_component::init(cx);
    bind_keys(cx);

    let model = cx.new(|_| game);

    let bounds = Bounds::centered(None, size(px(900.0), px(600.0)), cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, settings_path, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    );

    if let Err(e) = opened {
        tracing::error!("failed to open window: {e:#}");
        cx.quit();
    }
}
