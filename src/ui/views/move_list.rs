//! Move list panel - the game's move history and the display style switcher.

use std::path::{Path, PathBuf};

use gpui::{App, Div, Entity, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::config::Settings;
use crate::models::GameModel;
use crate::ui::glyphs::DisplayStyle;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::view_models::move_pairs;

/// Render the move list panel for a given game model.
pub fn render_move_list_panel(model: &Entity<GameModel>, settings_path: &Path, cx: &App) -> Div {
    let game = model.read(cx);
    let pairs = move_pairs(game.history());
    let current_style = game.display_style;
    let awaiting_choice = game.pending_promotion().is_some();

    let style_switcher = div().flex().gap_1().children(DisplayStyle::ALL.map(|style| {
        render_style_button(style, style == current_style, model.clone(), settings_path.to_path_buf())
    }));

    let move_list = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .flex()
                .items_center()
                .justify_between()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Move History")
                .child(style_switcher),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .flex()
                .flex_col()
                .gap_1()
                .when(pairs.is_empty(), |el| {
                    el.child(div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet"))
                })
                .children(pairs.into_iter().map(|pair| {
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .py_1()
                        .child(
                            div()
                                .text_color(rgb(TEXT_SECONDARY))
                                .w(px(40.0))
                                .child(format!("{}.", pair.move_num)),
                        )
                        .child(div().text_color(rgb(TEXT_PRIMARY)).flex_1().child(pair.white))
                        .when_some(pair.black, |el, black| {
                            el.child(div().text_color(rgb(TEXT_PRIMARY)).flex_1().child(black))
                        })
                })),
        )
        .when(awaiting_choice, |el| {
            el.child(
                div()
                    .p_3()
                    .border_t_1()
                    .border_color(rgb(BORDER_COLOR))
                    .text_color(rgb(TEXT_SECONDARY))
                    .text_sm()
                    .child("Choose a piece (q/r/n/b), esc to cancel"),
            )
        });

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(move_list)
}

/// Button selecting a display style; the choice is written back to the settings file
fn render_style_button(
    style: DisplayStyle,
    is_active: bool,
    model: Entity<GameModel>,
    settings_path: PathBuf,
) -> impl IntoElement {
    let button = Button::new(style.name()).label(style.name()).compact();
    let button = if is_active {
        button.primary()
    } else {
        button.ghost()
    };

    button.on_click(move |_, _, cx| {
        model.update(cx, |game, cx| {
            game.display_style = style;
            cx.notify();
        });
        let settings = Settings {
            display_style: style,
        };
        if let Err(e) = settings.save(&settings_path) {
            tracing::warn!("failed to save settings: {e:#}");
        }
    })
}
