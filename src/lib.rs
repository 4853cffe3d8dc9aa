//! popmenu
//!
//! A context-sensitive popup menu component for egui applications.
//!
//! The embedding context owns a [`MenuState`] (visibility, title, ordered
//! action list) and passes it into [`render_context_menu`] each frame. The
//! component invokes selected action callbacks synchronously and reports
//! everything else — including dismissal requests — back through
//! [`MenuEvent`] values, so the embedding context stays the single writer of
//! its own state.
//!
//! # Example
//!
//! ```no_run
//! use popmenu::{MenuAction, MenuState, TracingSink};
//!
//! let mut menu = MenuState::with_actions(
//!     vec![
//!         MenuAction::new("Copy", || { /* copy the item */ }),
//!         MenuAction::new("Delete", || { /* delete the item */ }).with_class("danger"),
//!     ],
//!     TracingSink::shared(),
//! );
//! menu.set_title("Item Menu");
//! menu.set_visible(true);
//! // each frame: popmenu::render_context_menu(ctx, &mut host, &mut menu, scheme)
//! ```

pub mod core;
pub mod menu;
pub mod window;

pub use core::events::MenuEvent;
pub use core::settings::{ColorScheme, Settings};
pub use menu::action::{ActionCallback, InvocationError, MenuAction};
pub use menu::registry::{
    ActionRegistry, EXAMPLE_ACTION_CLASS, EXAMPLE_ACTION_NAME, EXAMPLE_LOG_MESSAGE,
};
pub use menu::sink::{DiagnosticSink, RecordingSink, TracingSink};
pub use menu::state::MenuState;
pub use window::{render_context_menu, ContextMenuHost, DemoApp};
