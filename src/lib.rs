pub mod app;
pub mod error;
pub mod event;
pub mod game;
pub mod scores;
pub mod settings;
pub mod stats;
pub mod ui;
