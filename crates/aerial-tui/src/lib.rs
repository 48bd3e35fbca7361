//! Aerial signup TUI.

pub mod input;
pub mod widgets;
pub mod wizard;
