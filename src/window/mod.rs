//! Window module
//!
//! The egui render pass for the menu popup and the demo embedding app.

pub mod app;
mod context_menu;

pub use app::DemoApp;
pub use context_menu::{render_context_menu, ContextMenuHost};
