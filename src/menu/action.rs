//! Menu actions
//!
//! A `MenuAction` is one selectable entry in the context menu: a name (often
//! a localization key), an optional styling classifier, and the callback run
//! when the entry is selected.

use std::fmt;
use thiserror::Error;

/// Zero-argument operation run when an action is selected.
pub type ActionCallback = Box<dyn FnMut()>;

/// Errors surfaced by the invocation protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    /// The action was constructed without a callback and cannot be invoked.
    #[error("menu action '{name}' has no callback")]
    MissingCallback {
        /// Name of the malformed action.
        name: String,
    },
}

/// One selectable operation in a context menu.
///
/// The callback is owned by whoever constructs the action; the component
/// invokes it but never replaces it. `class_name` is opaque to all logic —
/// it is carried for custom renderers and never interpreted here.
pub struct MenuAction {
    name: String,
    class_name: Option<String>,
    callback: Option<ActionCallback>,
}

impl MenuAction {
    /// Create a well-formed action with a name and callback.
    pub fn new(name: impl Into<String>, callback: impl FnMut() + 'static) -> Self {
        Self {
            name: name.into(),
            class_name: None,
            callback: Some(Box::new(callback)),
        }
    }

    /// Create an action without a callback.
    ///
    /// The component does not validate actions up front; invoking a
    /// placeholder fails with [`InvocationError::MissingCallback`]. Embedding
    /// contexts populating `context_actions` from external data should guard
    /// against this themselves.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: None,
            callback: None,
        }
    }

    /// Attach a styling classifier.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The action's name/label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The styling classifier, if any.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Whether the action carries a callback.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the action's callback, exactly once per call.
    ///
    /// Panics raised by the callback propagate unmodified; the component
    /// performs no recovery or suppression.
    pub fn invoke(&mut self) -> Result<(), InvocationError> {
        match self.callback.as_mut() {
            Some(callback) => {
                callback();
                Ok(())
            }
            None => Err(InvocationError::MissingCallback {
                name: self.name.clone(),
            }),
        }
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAction")
            .field("name", &self.name)
            .field("class_name", &self.class_name)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
