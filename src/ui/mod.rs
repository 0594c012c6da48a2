pub mod board_layout;
pub mod components;
pub mod glyphs;
pub mod promotion;
pub mod theme;
pub mod view_models;
pub mod views;

pub use board_layout::BoardLayout;
