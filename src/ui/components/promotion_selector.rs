//! Promotion selector - a column of piece buttons hanging from the board edge.
//!
//! Only built for an open [`PromotionPopup`]; a closed request renders nothing,
//! so there is no element left to intercept mouse input.

use std::rc::Rc;

use gpui::{AnyElement, App, SharedString, Window, div, prelude::*, px, relative, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::PromotionChoice;
use crate::ui::components::render_glyph;
use crate::ui::glyphs::light_fill_glyph;
use crate::ui::promotion::{AnchorEdge, PromotionOption, PromotionPopup, PromotionSlot};
use crate::ui::theme::{
    BORDER_COLOR, PIECE_SCALE, PROMOTION_INDICATOR, PROMOTION_INDICATOR_HEIGHT, promotion_bg,
    promotion_hover_bg,
};

type ChoiceHandler = Rc<dyn Fn(PromotionChoice, &mut Window, &mut App)>;

/// Render the selector over a board whose squares are `square_size` wide.
/// `on_choice` runs once per click with the clicked piece.
pub fn render_promotion_selector<T>(
    popup: &PromotionPopup,
    square_size: f32,
    on_choice: T,
) -> impl IntoElement + use<T>
where
    T: Fn(PromotionChoice, &mut Window, &mut App) + 'static,
{
    let on_choice: ChoiceHandler = Rc::new(on_choice);

    let slots: Vec<AnyElement> = popup
        .slots
        .iter()
        .map(|slot| match slot {
            PromotionSlot::Indicator => div()
                .w_full()
                .h(px(PROMOTION_INDICATOR_HEIGHT))
                .bg(rgb(PROMOTION_INDICATOR))
                .into_any_element(),
            PromotionSlot::Option(option) => {
                render_option(option, popup, square_size, on_choice.clone()).into_any_element()
            }
        })
        .collect();

    let column = div()
        .id("promotion-selector")
        .absolute()
        .left(relative(popup.left_percent() / 100.0))
        .w(px(square_size))
        .flex()
        .flex_col()
        .bg(promotion_bg(popup.side_to_move))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .shadow_lg()
        .overflow_hidden()
        .children(slots);

    match popup.edge {
        AnchorEdge::Top => column.top_0(),
        AnchorEdge::Bottom => column.bottom_0(),
    }
}

/// Click handler for one option: reports that option's piece, once per call
fn bind_choice<W, C, F>(choice: PromotionChoice, on_choice: Rc<F>) -> impl Fn(&mut W, &mut C)
where
    W: 'static,
    C: 'static,
    F: Fn(PromotionChoice, &mut W, &mut C) + ?Sized + 'static,
{
    move |window, cx| on_choice(choice, window, cx)
}

fn render_option(
    option: &PromotionOption,
    popup: &PromotionPopup,
    square_size: f32,
    on_choice: ChoiceHandler,
) -> impl IntoElement {
    let on_click = bind_choice(option.choice, on_choice);
    let hover_bg = promotion_hover_bg(popup.side_to_move);

    div()
        .flex_shrink_0()
        .size(px(square_size))
        .hover(move |s| s.bg(hover_bg))
        .child(
            Button::new(SharedString::from(format!(
                "promote-{}",
                option.label.to_lowercase()
            )))
            .ghost()
            .size_full()
            .tooltip(option.label)
            .child(render_glyph(
                option.glyph,
                light_fill_glyph(option.choice.kind(), popup.display_style),
                popup.side_to_move,
                square_size * PIECE_SCALE,
            ))
            .on_click(move |_ev, window, cx| on_click(window, cx)),
        )
}
