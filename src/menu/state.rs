//! Menu state and binding contract
//!
//! `MenuState` is owned by the embedding context and passed as `&mut` into
//! each render pass — the component never keeps a private copy. The fields
//! are public so the embedding context can assign them directly; the setters
//! are the same storage with the contract spelled out.

use super::action::MenuAction;
use super::registry::ActionRegistry;
use super::sink::DiagnosticSink;
use std::sync::Arc;

/// Live state of one context menu instance.
///
/// The state machine is two states, `Hidden` and `Visible`, driven entirely
/// by `show_context_menu`. It starts `Hidden` and is reusable indefinitely
/// across show/hide cycles. The component itself never writes
/// `show_context_menu`; dismissal is reported back as a
/// [`MenuEvent`](crate::core::events::MenuEvent) for the owner to apply.
#[derive(Debug)]
pub struct MenuState {
    /// Actions specific to the context this menu was launched from.
    /// Insertion order is display order; names need not be unique.
    pub context_actions: Vec<MenuAction>,

    /// Whether the menu is displayed. Single source of truth for visibility.
    pub show_context_menu: bool,

    /// Header text of the menu.
    pub title: String,
}

impl MenuState {
    /// Create a hidden menu with the default action set installed.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_actions(Vec::new(), sink)
    }

    /// Create a hidden menu with caller-supplied actions.
    ///
    /// If `actions` is empty the default action set is installed instead, so
    /// the menu is never initialized with zero functionality.
    pub fn with_actions(actions: Vec<MenuAction>, sink: Arc<dyn DiagnosticSink>) -> Self {
        let context_actions = if actions.is_empty() {
            ActionRegistry::defaults(&sink)
        } else {
            actions
        };

        Self {
            context_actions,
            show_context_menu: false,
            title: String::new(),
        }
    }

    /// Toggle rendering. Total and idempotent.
    pub fn set_visible(&mut self, visible: bool) {
        self.show_context_menu = visible;
    }

    /// Replace the header text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the full action list atomically.
    ///
    /// Partial updates are not supported; an empty vector is valid and
    /// yields an empty menu body.
    pub fn set_actions(&mut self, actions: Vec<MenuAction>) {
        self.context_actions = actions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::registry::EXAMPLE_ACTION_NAME;
    use crate::menu::sink::RecordingSink;

    fn sink() -> Arc<dyn DiagnosticSink> {
        RecordingSink::shared()
    }

    #[test]
    fn test_initial_state_is_hidden() {
        let menu = MenuState::new(sink());
        assert!(!menu.show_context_menu);
        assert!(menu.title.is_empty());
    }

    #[test]
    fn test_visibility_equals_last_assignment() {
        let mut menu = MenuState::new(sink());

        menu.set_visible(true);
        assert!(menu.show_context_menu);

        menu.set_visible(false);
        assert!(!menu.show_context_menu);
    }

    #[test]
    fn test_visibility_assignment_is_idempotent() {
        let mut menu = MenuState::new(sink());

        menu.set_visible(true);
        menu.set_visible(true);
        assert!(menu.show_context_menu);

        menu.set_visible(false);
        menu.set_visible(false);
        assert!(!menu.show_context_menu);
    }

    #[test]
    fn test_rapid_toggle_ends_visible_with_observable_intermediates() {
        let mut menu = MenuState::new(sink());

        menu.set_visible(true);
        assert!(menu.show_context_menu);
        menu.set_visible(false);
        assert!(!menu.show_context_menu);
        menu.set_visible(true);
        assert!(menu.show_context_menu);
    }

    #[test]
    fn test_set_actions_preserves_order_and_duplicates() {
        let mut menu = MenuState::new(sink());

        menu.set_actions(vec![
            MenuAction::new("Copy", || {}),
            MenuAction::new("Delete", || {}),
            MenuAction::new("Copy", || {}),
        ]);

        let names: Vec<&str> = menu.context_actions.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Copy", "Delete", "Copy"]);
    }

    #[test]
    fn test_empty_action_list_is_valid() {
        let mut menu = MenuState::new(sink());
        menu.set_actions(Vec::new());
        assert!(menu.context_actions.is_empty());
    }

    #[test]
    fn test_new_installs_default_action() {
        let menu = MenuState::new(sink());
        assert_eq!(menu.context_actions.len(), 1);
        assert_eq!(menu.context_actions[0].name(), EXAMPLE_ACTION_NAME);
    }

    #[test]
    fn test_with_actions_skips_defaults_when_nonempty() {
        let menu = MenuState::with_actions(vec![MenuAction::new("Copy", || {})], sink());
        assert_eq!(menu.context_actions.len(), 1);
        assert_eq!(menu.context_actions[0].name(), "Copy");
    }

    #[test]
    fn test_set_title_replaces_header() {
        let mut menu = MenuState::new(sink());
        menu.set_title("Item Menu");
        assert_eq!(menu.title, "Item Menu");

        menu.set_title("");
        assert_eq!(menu.title, "");
    }
}
