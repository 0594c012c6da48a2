//! Glyph tables: (piece kind, side, display style) -> symbol.

use serde::{Deserialize, Serialize};

use crate::domain::{PieceColor, PieceKind};

/// How pieces are drawn. `Modern` currently renders the same glyphs as `Standard`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DisplayStyle {
    #[default]
    Standard,
    Minimalist,
    Modern,
}

impl DisplayStyle {
    pub const ALL: [DisplayStyle; 3] = [
        DisplayStyle::Standard,
        DisplayStyle::Minimalist,
        DisplayStyle::Modern,
    ];

    /// Parse a style name, falling back to `Standard` for anything unrecognised
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimalist" => DisplayStyle::Minimalist,
            "modern" => DisplayStyle::Modern,
            "standard" => DisplayStyle::Standard,
            _ => DisplayStyle::Standard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayStyle::Standard => "Standard",
            DisplayStyle::Minimalist => "Minimalist",
            DisplayStyle::Modern => "Modern",
        }
    }
}

impl From<String> for DisplayStyle {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

/// Symbol for a piece in the given display style
pub fn glyph(kind: PieceKind, color: PieceColor, style: DisplayStyle) -> &'static str {
    match style {
        DisplayStyle::Minimalist => letter_glyph(kind, color),
        DisplayStyle::Standard => symbol_glyph(kind, color),
        // no dedicated table yet
        DisplayStyle::Modern => symbol_glyph(kind, color),
    }
}

/// Solid silhouette drawn under a light piece's outline symbol.
/// Letter styles have none.
pub fn light_fill_glyph(kind: PieceKind, style: DisplayStyle) -> Option<&'static str> {
    match style {
        DisplayStyle::Minimalist => None,
        DisplayStyle::Standard | DisplayStyle::Modern => {
            Some(symbol_glyph(kind, PieceColor::Black))
        }
    }
}

fn letter_glyph(kind: PieceKind, color: PieceColor) -> &'static str {
    match (kind, color) {
        (PieceKind::King, PieceColor::White) => "K",
        (PieceKind::Queen, PieceColor::White) => "Q",
        (PieceKind::Rook, PieceColor::White) => "R",
        (PieceKind::Bishop, PieceColor::White) => "B",
        (PieceKind::Knight, PieceColor::White) => "N",
        (PieceKind::Pawn, PieceColor::White) => "P",
        (PieceKind::King, PieceColor::Black) => "k",
        (PieceKind::Queen, PieceColor::Black) => "q",
        (PieceKind::Rook, PieceColor::Black) => "r",
        (PieceKind::Bishop, PieceColor::Black) => "b",
        (PieceKind::Knight, PieceColor::Black) => "n",
        (PieceKind::Pawn, PieceColor::Black) => "p",
    }
}

fn symbol_glyph(kind: PieceKind, color: PieceColor) -> &'static str {
    match (kind, color) {
        (PieceKind::King, PieceColor::White) => "♔",
        (PieceKind::Queen, PieceColor::White) => "♕",
        (PieceKind::Rook, PieceColor::White) => "♖",
        (PieceKind::Bishop, PieceColor::White) => "♗",
        (PieceKind::Knight, PieceColor::White) => "♘",
        (PieceKind::Pawn, PieceColor::White) => "♙",
        (PieceKind::King, PieceColor::Black) => "♚",
        (PieceKind::Queen, PieceColor::Black) => "♛",
        (PieceKind::Rook, PieceColor::Black) => "♜",
        (PieceKind::Bishop, PieceColor::Black) => "♝",
        (PieceKind::Knight, PieceColor::Black) => "♞",
        (PieceKind::Pawn, PieceColor::Black) => "♟",
    }
}
