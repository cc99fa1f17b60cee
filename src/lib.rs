pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod order;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
