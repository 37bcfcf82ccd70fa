//! Karaoke song list: a CSV-backed record of sung songs and their scores,
//! with search, delete, and score statistics, driven from a terminal UI.
//!
//! The store is usable on its own; the `bin` target wires it to the TUI.
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod stats;
pub mod store;
pub mod ui;

pub use config::Config;
pub use error::{Error, Result, ValidationError};

/// The domain types other layers manipulate.
pub use models::{SearchColumn, SongRecord};
pub use stats::{HistogramBin, ScoreSummary};
pub use store::{GitPushHook, PersistHook, SongStore};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
