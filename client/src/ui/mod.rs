// client/src/ui/mod.rs
pub mod actions;
pub mod admin;
pub mod canvas;
pub mod cards;
pub mod header;
pub mod layout;
pub mod state;
pub mod table;
mod theme;
pub(crate) mod ws;
