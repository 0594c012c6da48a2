//! Piece rendering component.

use crate::domain::{Piece, PieceColor};
use crate::ui::glyphs::{DisplayStyle, glyph, light_fill_glyph};
use crate::ui::theme::{LIGHT_PIECE_OUTLINE, LIGHT_PIECE_PLATE, piece_color};
use gpui::{AnyElement, Rgba, div, prelude::*, px, rgb};

/// Render a chess piece glyph centered in its container
pub fn render_piece(piece: Piece, style: DisplayStyle, piece_size: f32) -> impl IntoElement {
    render_glyph(
        glyph(piece.kind, piece.color, style),
        light_fill_glyph(piece.kind, style),
        piece.color,
        piece_size,
    )
}

/// Render a piece glyph in its side's color.
///
/// A light symbol with a `fill` silhouette is drawn as that silhouette under a
/// dark outline; other light glyphs sit on a dark plate. Either way they stay
/// readable on light backgrounds.
pub fn render_glyph(
    symbol: &'static str,
    fill: Option<&'static str>,
    color: PieceColor,
    size: f32,
) -> AnyElement {
    let layer = |text: &'static str, text_color: Rgba| {
        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(size))
            .line_height(px(size))
            .text_color(text_color)
            .child(text)
    };

    match (color, fill) {
        (PieceColor::White, Some(fill)) => div()
            .relative()
            .size_full()
            .child(layer(fill, piece_color(color)))
            .child(layer(symbol, rgb(LIGHT_PIECE_OUTLINE)))
            .into_any_element(),
        (PieceColor::White, None) => div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .relative()
                    .size(px(size))
                    .rounded_full()
                    .bg(rgb(LIGHT_PIECE_PLATE))
                    .child(layer(symbol, piece_color(color))),
            )
            .into_any_element(),
        (PieceColor::Black, _) => div()
            .relative()
            .size_full()
            .child(layer(symbol, piece_color(color)))
            .into_any_element(),
    }
}
