//! The closed set of pieces a pawn may promote to.

use schemars::JsonSchema;
use serde::Deserialize;
use shakmaty::Role;

use super::PieceKind;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PromotionChoice {
    Queen,
    Rook,
    Knight,
    Bishop,
}

impl PromotionChoice {
    /// Offer order, strongest first
    pub const ALL: [PromotionChoice; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Knight,
        PromotionChoice::Bishop,
    ];

    /// Human-readable name, used for tooltips
    pub fn label(self) -> &'static str {
        match self {
            PromotionChoice::Queen => "Queen",
            PromotionChoice::Rook => "Rook",
            PromotionChoice::Knight => "Knight",
            PromotionChoice::Bishop => "Bishop",
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Knight => PieceKind::Knight,
            PromotionChoice::Bishop => PieceKind::Bishop,
        }
    }

    pub fn role(self) -> Role {
        match self {
            PromotionChoice::Queen => Role::Queen,
            PromotionChoice::Rook => Role::Rook,
            PromotionChoice::Knight => Role::Knight,
            PromotionChoice::Bishop => Role::Bishop,
        }
    }
}
