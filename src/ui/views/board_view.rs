//! Chess board view - the main board with drag-and-drop piece movement
//! and the promotion selector overlay.

use std::path::PathBuf;

use gpui::{
    App, Context, Entity, FocusHandle, KeyBinding, MouseButton, MouseDownEvent, MouseMoveEvent,
    MouseUpEvent, Pixels, Subscription, Window, actions, canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domain::PromotionChoice;
use crate::models::{GameModel, MoveOutcome};
use crate::ui::components::{render_piece, render_promotion_selector, render_square};
use crate::ui::promotion::promotion_popup;
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::view_models::DragState;
use crate::ui::views::render_move_list_panel;

const KEY_CONTEXT: &str = "ChessBoard";

actions!(chess, [CancelPromotion]);

/// Pick a piece for the pending promotion
#[derive(Clone, PartialEq, Debug, Deserialize, JsonSchema, gpui::Action)]
#[action(namespace = chess)]
pub struct ChoosePromotion {
    pub choice: PromotionChoice,
}

/// Keyboard shortcuts for the board: q/r/n/b pick a piece, escape cancels
pub fn bind_keys(cx: &mut App) {
    let choose = |key: &str, choice| {
        KeyBinding::new(key, ChoosePromotion { choice }, Some(KEY_CONTEXT))
    };
    cx.bind_keys([
        choose("q", PromotionChoice::Queen),
        choose("r", PromotionChoice::Rook),
        choose("n", PromotionChoice::Knight),
        choose("b", PromotionChoice::Bishop),
        KeyBinding::new("escape", CancelPromotion, Some(KEY_CONTEXT)),
    ]);
}

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    settings_path: PathBuf,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(
        model: Entity<GameModel>,
        settings_path: PathBuf,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self {
            model,
            settings_path,
            focus_handle,
            _subscription,
        }
    }

    fn choose_promotion(
        &mut self,
        action: &ChoosePromotion,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.model.update(cx, |game, cx| {
            // The selector closes even when the choice cannot be applied
            if game.pending_promotion().is_some() {
                game.choose_promotion(action.choice);
                cx.notify();
            }
        });
    }

    fn cancel_promotion(
        &mut self,
        _: &CancelPromotion,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.model.update(cx, |game, cx| {
            game.cancel_promotion();
            cx.notify();
        });
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let on_choose = cx.listener(Self::choose_promotion);
        let on_cancel = cx.listener(Self::cancel_promotion);

        let model = self.model.clone();
        let model_down = model.clone();
        let model_move = model.clone();
        let model_up = model.clone();
        let model_measure = model.clone();
        let model_choice = model.clone();

        let game = self.model.read(cx);
        let drag_state = game.drag_state;
        let dragging_from = drag_state.map(|d| (d.from_row, d.from_col));
        let style = game.display_style;

        // Sizing based on measured panel dimensions
        let layout = game.layout();
        let square_size = layout.square_size();
        let piece_size = layout.piece_size();

        // Floating piece follows cursor during drag
        let floating_piece = drag_state.map(|d| {
            div()
                .absolute()
                .left(px(d.mouse_x - square_size / 2.0))
                .top(px(d.mouse_y - square_size / 2.0))
                .size(px(square_size))
                .child(render_piece(d.piece, style, piece_size))
        });

        // Selector only exists while a promotion is pending
        let selector = promotion_popup(&game.promotion_request()).map(|popup| {
            render_promotion_selector(&popup, square_size, move |choice, _window, cx| {
                model_choice.update(cx, |game, cx| {
                    game.choose_promotion(choice);
                    cx.notify();
                });
            })
        });

        let board = div()
            .relative()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(layout.board_total_size()))
            .h(px(layout.board_total_size()))
            .overflow_hidden()
            .rounded_md()
            .children((0..8).map(|row| {
                div().flex().flex_shrink_0().children((0..8).map(|col| {
                    let piece = game.piece_at(row, col);
                    let is_being_dragged = dragging_from == Some((row, col));
                    render_square(
                        row,
                        col,
                        piece,
                        is_being_dragged,
                        style,
                        square_size,
                        piece_size,
                    )
                }))
            }))
            .when_some(selector, |el, s| el.child(s));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .when_some(floating_piece, |el, fp| el.child(fp))
            // Mouse down: start drag if clicking on a piece
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |game, cx| {
                        // The selector owns input while open
                        if game.pending_promotion().is_some() {
                            return;
                        }
                        let pos = ev.position;
                        let Some((row, col)) =
                            game.layout().pos_to_square(pos.x.into(), pos.y.into())
                        else {
                            return;
                        };
                        if let Some(piece) = game.piece_at(row, col) {
                            if piece.color == game.current_turn() {
                                game.drag_state = Some(DragState {
                                    piece,
                                    from_row: row,
                                    from_col: col,
                                    mouse_x: pos.x.into(),
                                    mouse_y: pos.y.into(),
                                });
                                cx.notify();
                            }
                        }
                    });
                },
            )
            // Mouse move: update drag position
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                model_move.update(cx, |game, cx| {
                    if let Some(ref mut drag) = game.drag_state {
                        drag.mouse_x = ev.position.x.into();
                        drag.mouse_y = ev.position.y.into();
                        cx.notify();
                    }
                });
            })
            // Mouse up: complete the move, or open the selector
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |game, cx| {
                    if let Some(drag) = game.drag_state.take() {
                        let pos = ev.position;
                        if let Some(to) = game.layout().pos_to_square(pos.x.into(), pos.y.into())
                        {
                            let outcome = game.try_move((drag.from_row, drag.from_col), to);
                            if outcome == MoveOutcome::Illegal {
                                tracing::trace!(?to, "drop rejected");
                            }
                        }
                        cx.notify();
                    }
                });
            });

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |game, cx| {
                    if game.panel_size != bounds.size {
                        game.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let move_list_panel_content = render_move_list_panel(&model, &self.settings_path, cx);

        // Main resizable layout
        div()
            .size_full()
            .track_focus(&self.focus_handle)
            .key_context(KEY_CONTEXT)
            .on_action(on_choose)
            .on_action(on_cancel)
            .child(
                h_resizable("chess-layout")
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_LEFT_PANEL))
                            .size_range(px(320.)..px(1200.))
                            .child(board_panel_with_measure),
                    )
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_RIGHT_PANEL))
                            .size_range(px(150.)..Pixels::MAX)
                            .child(move_list_panel_content),
                    ),
            )
    }
}
