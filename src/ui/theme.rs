//! Theme constants and colors for the chess UI.

use gpui::{Rgba, rgb};

use crate::domain::PieceColor;

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.78; // glyph size relative to square
pub const GHOST_OPACITY: f32 = 0.4;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 540.0;
pub const INITIAL_RIGHT_PANEL: f32 = 280.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;

// Piece colors
pub const LIGHT_PIECE: u32 = 0xfafafa;
pub const DARK_PIECE: u32 = 0x1a1a1a;
/// Edge drawn over light pieces so they read on light squares
pub const LIGHT_PIECE_OUTLINE: u32 = 0x1a1a1a;
/// Backdrop behind light letters, which have no outline glyph
pub const LIGHT_PIECE_PLATE: u32 = 0x57534e;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;

// Promotion selector, background contrasts with the promoting side
pub const PROMOTION_BG_LIGHT_SIDE: u32 = 0x3a3a3a;
pub const PROMOTION_HOVER_LIGHT_SIDE: u32 = 0x52525b;
pub const PROMOTION_BG_DARK_SIDE: u32 = 0xf5f5f4;
pub const PROMOTION_HOVER_DARK_SIDE: u32 = 0xd6d3d1;
pub const PROMOTION_INDICATOR: u32 = 0x4a6da7;
pub const PROMOTION_INDICATOR_HEIGHT: f32 = 6.0;

/// Get the color for a board square based on its position
pub fn square_color(row: usize, col: usize) -> Rgba {
    if (row + col) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}

/// Text color used to draw a piece glyph of the given side
pub fn piece_color(color: PieceColor) -> Rgba {
    rgb(piece_hex(color))
}

/// Selector background for the promoting side
pub fn promotion_bg(color: PieceColor) -> Rgba {
    rgb(promotion_bg_hex(color))
}

/// Selector hover background for the promoting side
pub fn promotion_hover_bg(color: PieceColor) -> Rgba {
    rgb(promotion_hover_hex(color))
}

fn piece_hex(color: PieceColor) -> u32 {
    match color {
        PieceColor::White => LIGHT_PIECE,
        PieceColor::Black => DARK_PIECE,
    }
}

fn promotion_bg_hex(color: PieceColor) -> u32 {
    match color {
        PieceColor::White => PROMOTION_BG_LIGHT_SIDE,
        PieceColor::Black => PROMOTION_BG_DARK_SIDE,
    }
}

fn promotion_hover_hex(color: PieceColor) -> u32 {
    match color {
        PieceColor::White => PROMOTION_HOVER_LIGHT_SIDE,
        PieceColor::Black => PROMOTION_HOVER_DARK_SIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luminance(hex: u32) -> f32 {
        let channel = |shift: u32| {
            let c = ((hex >> shift) & 0xff) as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * channel(16) + 0.7152 * channel(8) + 0.0722 * channel(0)
    }

    fn contrast(a: u32, b: u32) -> f32 {
        let (la, lb) = (luminance(a), luminance(b));
        (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
    }

    #[test]
    fn test_contrast_reference_values() {
        assert!((contrast(0xffffff, 0x000000) - 21.0).abs() < 0.01);
        assert!((contrast(0x808080, 0x808080) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_promotion_glyphs_readable_for_both_sides() {
        for color in [PieceColor::White, PieceColor::Black] {
            let glyph = piece_hex(color);
            assert!(
                contrast(glyph, promotion_bg_hex(color)) >= 4.5,
                "{color:?} glyph on selector background"
            );
            assert!(
                contrast(glyph, promotion_hover_hex(color)) >= 4.5,
                "{color:?} glyph on hovered option"
            );
        }
    }

    #[test]
    fn test_light_pieces_readable_on_board() {
        for square in [LIGHT_SQUARE, DARK_SQUARE] {
            assert!(contrast(LIGHT_PIECE_OUTLINE, square) >= 3.0);
        }
        assert!(contrast(LIGHT_PIECE, LIGHT_PIECE_PLATE) >= 4.5);
    }
}
