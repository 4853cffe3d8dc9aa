//! Menu event definitions
//!
//! Everything the component reports back to its embedding context comes out
//! of the render pass as a `MenuEvent`. The component never mutates shared
//! state to communicate; in particular it never writes `show_context_menu`
//! itself — dismissal is requested, not applied.

use crate::menu::action::InvocationError;

/// Events emitted by a render pass for the embedding context to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    /// An action was selected and its callback ran to completion.
    ///
    /// The menu stays visible; whether selection closes the menu is the
    /// embedding context's policy.
    ActionInvoked {
        /// Position of the action in `context_actions` at selection time.
        index: usize,
        /// Name of the invoked action.
        name: String,
    },

    /// An action was selected but could not be invoked.
    InvocationFailed {
        /// Position of the action in `context_actions` at selection time.
        index: usize,
        /// Name of the malformed action.
        name: String,
        /// Why the invocation failed.
        error: InvocationError,
    },

    /// The user clicked outside the menu; the owner should hide it.
    DismissRequested,
}
