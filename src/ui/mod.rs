//! Ratatui front-end: one song table, a statistics panel, and modal forms for
//! adding, searching, and deleting.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
