//! Terminal UI: the game screen, the board widget, and the event loop that
//! feeds keyboard and mouse input to the game.

mod app;
pub mod board_widget;
pub mod game_view;
pub mod terminal;

pub use app::App;
