//! Game state model - the application layer for chess game state.
//!
//! Owns the position and is the caller side of the promotion selector: it
//! notices when a pawn move needs a piece choice, holds the move until the
//! choice arrives, and applies it.

use anyhow::{Context as _, Result, anyhow};
use gpui::{Pixels, Size};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, File, Move, Position, Square};

use crate::domain::{
    Piece, PieceColor, PromotionChoice, from_square, shakmaty_to_piece, to_square,
};
use crate::ui::BoardLayout;
use crate::ui::glyphs::DisplayStyle;
use crate::ui::promotion::{Anchor, PromotionRequest};
use crate::ui::view_models::DragState;

/// A pawn move waiting for the player to pick a piece
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

/// What happened when the player dropped a piece
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Played,
    PromotionPending,
    Illegal,
}

/// The main game model containing all chess game state
pub struct GameModel {
    position: Chess,
    /// SAN of every move played so far
    history: Vec<String>,
    pending_promotion: Option<PendingPromotion>,
    /// Drag state for piece movement
    pub drag_state: Option<DragState>,
    /// Measured panel size from canvas
    pub panel_size: Size<Pixels>,
    pub display_style: DisplayStyle,
}

impl GameModel {
    pub fn new(display_style: DisplayStyle) -> Self {
        Self::from_position(Chess::default(), display_style)
    }

    /// Start from a FEN string instead of the initial position
    pub fn from_fen(fen: &str, display_style: DisplayStyle) -> Result<Self> {
        let fen: Fen = fen
            .parse()
            .with_context(|| format!("invalid FEN: {fen}"))?;
        let position: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|e| anyhow!("illegal position: {e}"))?;
        Ok(Self::from_position(position, display_style))
    }

    fn from_position(position: Chess, display_style: DisplayStyle) -> Self {
        Self {
            position,
            history: Vec::new(),
            pending_promotion: None,
            drag_state: None,
            panel_size: BoardLayout::default().panel_size,
            display_style,
        }
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.panel_size)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Get piece at row/col from the current position
    pub fn piece_at(&self, row: usize, col: usize) -> Option<Piece> {
        let sq = to_square(row, col);
        self.position.board().piece_at(sq).map(shakmaty_to_piece)
    }

    pub fn current_turn(&self) -> PieceColor {
        self.position.turn().into()
    }

    /// Legal moves matching a from/to pair. Castling is matched on the king's destination.
    fn matching_moves(&self, from: Square, to: Square) -> Vec<Move> {
        self.position
            .legal_moves()
            .into_iter()
            .filter(|m| {
                let (move_from, move_to) = match m {
                    Move::Normal { from, to, .. } => (*from, *to),
                    Move::EnPassant { from, to, .. } => (*from, *to),
                    Move::Castle { king, rook } => {
                        let king_dest = if rook.file() == File::H {
                            Square::from_coords(File::G, rook.rank())
                        } else {
                            Square::from_coords(File::C, rook.rank())
                        };
                        (*king, king_dest)
                    }
                    Move::Put { .. } => return false,
                };
                move_from == from && move_to == to
            })
            .collect()
    }

    /// Try to make a move from one square to another.
    ///
    /// Pawn moves onto the last rank are not played yet: they are held as a
    /// pending promotion until [`GameModel::choose_promotion`] is called.
    pub fn try_move(&mut self, from: (usize, usize), to: (usize, usize)) -> MoveOutcome {
        if self.pending_promotion.is_some() {
            return MoveOutcome::Illegal;
        }

        let from_sq = to_square(from.0, from.1);
        let to_sq = to_square(to.0, to.1);
        let candidates = self.matching_moves(from_sq, to_sq);

        let is_promotion = candidates
            .iter()
            .any(|m| matches!(m, Move::Normal { promotion: Some(_), .. }));
        if is_promotion {
            tracing::debug!(from = %from_sq, to = %to_sq, "promotion pending");
            self.pending_promotion = Some(PendingPromotion {
                from: from_sq,
                to: to_sq,
            });
            return MoveOutcome::PromotionPending;
        }

        match candidates.into_iter().next() {
            Some(m) => {
                if self.play(m) {
                    MoveOutcome::Played
                } else {
                    MoveOutcome::Illegal
                }
            }
            None => MoveOutcome::Illegal,
        }
    }

    /// Apply the player's pick to the pending promotion. Returns false if none is pending.
    pub fn choose_promotion(&mut self, choice: PromotionChoice) -> bool {
        let Some(pending) = self.pending_promotion else {
            return false;
        };

        let role = choice.role();
        let chosen = self
            .matching_moves(pending.from, pending.to)
            .into_iter()
            .find(|m| matches!(m, Move::Normal { promotion: Some(r), .. } if *r == role));

        self.pending_promotion = None;
        match chosen {
            Some(m) => self.play(m),
            None => {
                tracing::warn!(?choice, "no legal promotion for choice");
                false
            }
        }
    }

    /// Drop the pending promotion, leaving the pawn where it was
    pub fn cancel_promotion(&mut self) {
        if self.pending_promotion.take().is_some() {
            tracing::debug!("promotion cancelled");
        }
    }

    /// Request data for the promotion selector
    pub fn promotion_request(&self) -> PromotionRequest {
        let Some(pending) = self.pending_promotion else {
            return PromotionRequest::closed(self.current_turn(), self.display_style);
        };

        let (row, column) = from_square(pending.to);
        PromotionRequest {
            is_open: true,
            anchor: Some(Anchor {
                row: row as u8,
                column: column as u8,
                near_top_edge: row == 0,
            }),
            side_to_move: self.current_turn(),
            display_style: self.display_style,
        }
    }

    fn play(&mut self, m: Move) -> bool {
        let san = San::from_move(&self.position, m.clone()).to_string();
        match self.position.clone().play(m) {
            Ok(next) => {
                tracing::info!(%san, "move played");
                self.position = next;
                self.history.push(san);
                true
            }
            Err(e) => {
                tracing::warn!(%san, "failed to play move: {e}");
                false
            }
        }
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(DisplayStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PieceKind;

    // White pawn on e7, kings out of the way
    const WHITE_PROMOTES: &str = "8/4P3/8/8/8/8/8/K1k5 w - - 0 1";
    // Black pawn on d2
    const BLACK_PROMOTES: &str = "k7/8/8/8/8/8/3p4/K7 b - - 0 1";

    #[test]
    fn test_ordinary_move_is_played() {
        let mut game = GameModel::default();
        assert_eq!(game.try_move((6, 4), (4, 4)), MoveOutcome::Played);
        assert_eq!(game.history(), &["e4".to_string()]);
        assert_eq!(game.current_turn(), PieceColor::Black);
        assert!(!game.promotion_request().is_open);
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut game = GameModel::default();
        assert_eq!(game.try_move((6, 4), (3, 4)), MoveOutcome::Illegal);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_promotion_waits_for_choice() {
        let mut game = GameModel::from_fen(WHITE_PROMOTES, DisplayStyle::Minimalist).unwrap();
        assert_eq!(game.try_move((1, 4), (0, 4)), MoveOutcome::PromotionPending);

        // Nothing moved yet
        assert_eq!(game.piece_at(1, 4).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(game.piece_at(0, 4), None);
        assert!(game.history().is_empty());

        let request = game.promotion_request();
        assert!(request.is_open);
        assert_eq!(
            request.anchor,
            Some(Anchor {
                row: 0,
                column: 4,
                near_top_edge: true,
            })
        );
        assert_eq!(request.side_to_move, PieceColor::White);
        assert_eq!(request.display_style, DisplayStyle::Minimalist);
    }

    #[test]
    fn test_choose_applies_exactly_that_piece() {
        for choice in PromotionChoice::ALL {
            let mut game = GameModel::from_fen(WHITE_PROMOTES, DisplayStyle::Standard).unwrap();
            game.try_move((1, 4), (0, 4));
            assert!(game.choose_promotion(choice));

            let piece = game.piece_at(0, 4).unwrap();
            assert_eq!(piece.kind, choice.kind());
            assert_eq!(piece.color, PieceColor::White);
            assert_eq!(game.piece_at(1, 4), None);
            assert!(game.pending_promotion().is_none());
            assert!(!game.promotion_request().is_open);
        }
    }

    #[test]
    fn test_promotion_san() {
        let mut game = GameModel::from_fen(WHITE_PROMOTES, DisplayStyle::Standard).unwrap();
        game.try_move((1, 4), (0, 4));
        game.choose_promotion(PromotionChoice::Knight);
        assert_eq!(game.history(), &["e8=N".to_string()]);
    }

    #[test]
    fn test_black_promotion_anchors_bottom() {
        let mut game = GameModel::from_fen(BLACK_PROMOTES, DisplayStyle::Standard).unwrap();
        assert_eq!(game.try_move((6, 3), (7, 3)), MoveOutcome::PromotionPending);

        let request = game.promotion_request();
        assert_eq!(
            request.anchor,
            Some(Anchor {
                row: 7,
                column: 3,
                near_top_edge: false,
            })
        );
        assert_eq!(request.side_to_move, PieceColor::Black);

        assert!(game.choose_promotion(PromotionChoice::Bishop));
        assert_eq!(
            game.piece_at(7, 3),
            Some(Piece {
                kind: PieceKind::Bishop,
                color: PieceColor::Black,
            })
        );
    }

    #[test]
    fn test_cancel_keeps_pawn() {
        let mut game = GameModel::from_fen(WHITE_PROMOTES, DisplayStyle::Standard).unwrap();
        game.try_move((1, 4), (0, 4));
        game.cancel_promotion();

        assert!(game.pending_promotion().is_none());
        assert_eq!(game.piece_at(1, 4).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(game.current_turn(), PieceColor::White);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_moves_blocked_while_pending() {
        let mut game = GameModel::from_fen(WHITE_PROMOTES, DisplayStyle::Standard).unwrap();
        game.try_move((1, 4), (0, 4));
        // King a1 -> a2 would be legal otherwise
        assert_eq!(game.try_move((7, 0), (6, 0)), MoveOutcome::Illegal);
        assert!(game.pending_promotion().is_some());
    }

    #[test]
    fn test_unplayable_choice_still_closes_selector() {
        let mut game = GameModel::default();
        // e2-e4 has no promotion variant, so no choice can apply
        game.pending_promotion = Some(PendingPromotion {
            from: Square::E2,
            to: Square::E4,
        });
        assert!(game.promotion_request().is_open);

        assert!(!game.choose_promotion(PromotionChoice::Queen));
        assert!(game.pending_promotion().is_none());
        assert!(!game.promotion_request().is_open);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_choose_without_pending() {
        let mut game = GameModel::default();
        assert!(!game.choose_promotion(PromotionChoice::Queen));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_invalid_fen() {
        assert!(GameModel::from_fen("not a fen", DisplayStyle::Standard).is_err());
    }
}
