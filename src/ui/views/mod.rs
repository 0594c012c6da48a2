mod board_view;
mod move_list;

pub use board_view::{ChessBoardView, bind_keys};
pub use move_list::render_move_list_panel;
