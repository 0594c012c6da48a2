mod piece;
mod promotion_selector;
mod square;

pub use piece::{render_glyph, render_piece};
pub use promotion_selector::render_promotion_selector;
pub use square::render_square;
