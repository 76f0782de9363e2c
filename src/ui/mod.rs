//! Terminal UI: a mode menu and the game screen, with a cursor over the grid.

mod app;
pub mod game_view;
mod menu_view;

pub use app::{App, Screen};
