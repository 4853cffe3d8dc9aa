//! Default action set
//!
//! A freshly constructed menu is never empty: when the embedding context has
//! not supplied its own actions, a single example action is installed. It is
//! a placeholder — production embedding contexts are expected to replace it
//! entirely via `MenuState::set_actions`.

use super::action::MenuAction;
use super::sink::DiagnosticSink;
use std::sync::Arc;

/// Name of the built-in example action (a localization key).
pub const EXAMPLE_ACTION_NAME: &str = "USER_MENU.ACTION_EXAMPLE";

/// Styling classifier of the built-in example action.
pub const EXAMPLE_ACTION_CLASS: &str = "example";

/// Message the example action writes to the diagnostic sink.
pub const EXAMPLE_LOG_MESSAGE: &str = "Example action.";

/// Source of the fallback action set.
pub struct ActionRegistry;

impl ActionRegistry {
    /// Build the default action list: one example action whose callback logs
    /// a diagnostic message through the injected sink.
    pub fn defaults(sink: &Arc<dyn DiagnosticSink>) -> Vec<MenuAction> {
        let sink = Arc::clone(sink);
        vec![
            MenuAction::new(EXAMPLE_ACTION_NAME, move || sink.debug(EXAMPLE_LOG_MESSAGE))
                .with_class(EXAMPLE_ACTION_CLASS),
        ]
    }
}
