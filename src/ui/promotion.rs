//! Promotion selector view model.
//!
//! Turns a caller-owned [`PromotionRequest`] into the slots the selector draws.
//! This is a pure function of its input: nothing is remembered between openings,
//! and a closed request produces no popup at all.

use crate::domain::{PieceColor, PromotionChoice};
use crate::ui::glyphs::{DisplayStyle, glyph};

/// Board square the popup hangs from
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Anchor {
    pub row: u8,
    pub column: u8,
    /// Popup is flush with the top of the board and grows downwards
    pub near_top_edge: bool,
}

impl Default for Anchor {
    /// Top-left corner, growing downwards
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            near_top_edge: true,
        }
    }
}

/// Everything the selector needs from its caller
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PromotionRequest {
    pub is_open: bool,
    pub anchor: Option<Anchor>,
    pub side_to_move: PieceColor,
    pub display_style: DisplayStyle,
}

impl PromotionRequest {
    pub fn closed(side_to_move: PieceColor, display_style: DisplayStyle) -> Self {
        Self {
            is_open: false,
            anchor: None,
            side_to_move,
            display_style,
        }
    }
}

/// Which board edge the popup is flush with
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnchorEdge {
    Top,
    Bottom,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PromotionOption {
    pub choice: PromotionChoice,
    pub glyph: &'static str,
    /// Tooltip text, independent of the glyph
    pub label: &'static str,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PromotionSlot {
    /// Marker sitting against the anchor edge
    Indicator,
    Option(PromotionOption),
}

/// Display data for an open selector. Slots are listed top to bottom.
#[derive(Clone, PartialEq, Debug)]
pub struct PromotionPopup {
    pub anchor: Anchor,
    pub edge: AnchorEdge,
    pub side_to_move: PieceColor,
    pub display_style: DisplayStyle,
    pub slots: Vec<PromotionSlot>,
}

impl PromotionPopup {
    /// Horizontal offset as a percentage of the board width
    pub fn left_percent(&self) -> f32 {
        f32::from(self.anchor.column) * 12.5
    }

    #[cfg(test)]
    pub fn options(&self) -> impl Iterator<Item = &PromotionOption> {
        self.slots.iter().filter_map(|slot| match slot {
            PromotionSlot::Option(option) => Some(option),
            PromotionSlot::Indicator => None,
        })
    }
}

/// Build the popup for a request, or `None` when the selector is closed
pub fn promotion_popup(request: &PromotionRequest) -> Option<PromotionPopup> {
    if !request.is_open {
        return None;
    }

    let anchor = request.anchor.unwrap_or_default();
    let edge = if anchor.near_top_edge {
        AnchorEdge::Top
    } else {
        AnchorEdge::Bottom
    };

    let mut slots = Vec::with_capacity(PromotionChoice::ALL.len() + 1);
    slots.push(PromotionSlot::Indicator);
    slots.extend(PromotionChoice::ALL.iter().map(|&choice| {
        PromotionSlot::Option(PromotionOption {
            choice,
            glyph: glyph(choice.kind(), request.side_to_move, request.display_style),
            label: choice.label(),
        })
    }));

    // The option nearest the anchor edge comes first
    if edge == AnchorEdge::Bottom {
        slots.reverse();
    }

    Some(PromotionPopup {
        anchor,
        edge,
        side_to_move: request.side_to_move,
        display_style: request.display_style,
        slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_request(anchor: Option<Anchor>) -> PromotionRequest {
        PromotionRequest {
            is_open: true,
            anchor,
            side_to_move: PieceColor::White,
            display_style: DisplayStyle::Minimalist,
        }
    }

    fn slot_names(popup: &PromotionPopup) -> Vec<&'static str> {
        popup
            .slots
            .iter()
            .map(|slot| match slot {
                PromotionSlot::Indicator => "indicator",
                PromotionSlot::Option(option) => option.label,
            })
            .collect()
    }

    #[test]
    fn test_closed_request_has_no_popup() {
        for style in DisplayStyle::ALL {
            for color in [PieceColor::White, PieceColor::Black] {
                let request = PromotionRequest {
                    is_open: false,
                    anchor: Some(Anchor {
                        row: 7,
                        column: 3,
                        near_top_edge: false,
                    }),
                    side_to_move: color,
                    display_style: style,
                };
                assert!(promotion_popup(&request).is_none());
            }
        }
        let closed = PromotionRequest::closed(PieceColor::Black, DisplayStyle::Modern);
        assert!(promotion_popup(&closed).is_none());
    }

    #[test]
    fn test_top_edge_order() {
        let popup = promotion_popup(&open_request(Some(Anchor {
            row: 0,
            column: 4,
            near_top_edge: true,
        })))
        .unwrap();
        assert_eq!(popup.edge, AnchorEdge::Top);
        assert_eq!(
            slot_names(&popup),
            vec!["indicator", "Queen", "Rook", "Knight", "Bishop"]
        );
    }

    #[test]
    fn test_bottom_edge_order_is_reversed() {
        let popup = promotion_popup(&open_request(Some(Anchor {
            row: 7,
            column: 4,
            near_top_edge: false,
        })))
        .unwrap();
        assert_eq!(popup.edge, AnchorEdge::Bottom);
        assert_eq!(
            slot_names(&popup),
            vec!["Bishop", "Knight", "Rook", "Queen", "indicator"]
        );
    }

    #[test]
    fn test_each_choice_offered_once() {
        let popup = promotion_popup(&open_request(None)).unwrap();
        for choice in PromotionChoice::ALL {
            assert_eq!(popup.options().filter(|o| o.choice == choice).count(), 1);
        }
        assert_eq!(popup.options().count(), 4);
    }

    #[test]
    fn test_left_offset() {
        for column in 0..8u8 {
            let popup = promotion_popup(&open_request(Some(Anchor {
                row: 0,
                column,
                near_top_edge: true,
            })))
            .unwrap();
            assert_eq!(popup.left_percent(), f32::from(column) * 12.5);
        }
    }

    #[test]
    fn test_missing_anchor_defaults_to_top_left() {
        let popup = promotion_popup(&open_request(None)).unwrap();
        assert_eq!(popup.anchor, Anchor::default());
        assert_eq!(popup.edge, AnchorEdge::Top);
        assert_eq!(popup.left_percent(), 0.0);
    }

    #[test]
    fn test_glyphs_follow_side_and_style() {
        let mut request = open_request(None);
        request.side_to_move = PieceColor::Black;
        let popup = promotion_popup(&request).unwrap();
        let glyphs: Vec<_> = popup.options().map(|o| o.glyph).collect();
        assert_eq!(glyphs, vec!["q", "r", "n", "b"]);

        request.display_style = DisplayStyle::Standard;
        let popup = promotion_popup(&request).unwrap();
        let labels: Vec<_> = popup.options().map(|o| o.label).collect();
        assert_eq!(labels, vec!["Queen", "Rook", "Knight", "Bishop"]);
        assert_eq!(popup.options().next().map(|o| o.glyph), Some("♛"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let request = open_request(Some(Anchor {
            row: 7,
            column: 2,
            near_top_edge: false,
        }));
        assert_eq!(promotion_popup(&request), promotion_popup(&request));
    }
}
