pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod notebook;
pub mod render;
pub mod saved_words;
pub mod storage;
pub mod utilities;

pub use app::{App, MainView, Outcome};
pub use saved_words::SavedWords;
