//! View models that prepare game state for display.
//!
//! These types live in the UI layer, not the domain layer.

use crate::domain::Piece;

/// State for a piece being dragged
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub piece: Piece,
    pub from_row: usize,
    pub from_col: usize,
    /// Mouse position relative to window
    pub mouse_x: f32,
    pub mouse_y: f32,
}

/// One numbered row of the move history
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePairDisplay {
    pub move_num: usize,
    pub white: String,
    pub black: Option<String>,
}

/// Group a flat SAN history into numbered white/black pairs
pub fn move_pairs(history: &[String]) -> Vec<MovePairDisplay> {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, chunk)| MovePairDisplay {
            move_num: i + 1,
            white: chunk.first().cloned().unwrap_or_default(),
            black: chunk.get(1).cloned(),
        })
        .collect()
}
