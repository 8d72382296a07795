// client/src/lib.rs
pub mod app;
pub mod config;
pub mod messages;
pub mod ui;
pub mod view;
