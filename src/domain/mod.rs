//! Pure chess domain types. No GPUI dependencies live here.

mod chess;
mod promotion;

pub use chess::{Piece, PieceColor, PieceKind, from_square, shakmaty_to_piece, to_square};
pub use promotion::PromotionChoice;
