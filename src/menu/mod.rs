//! Menu component state contract
//!
//! The externally-owned state of one context menu instance, the action
//! invocation protocol, and the default action set.

pub mod action;
pub mod registry;
pub mod sink;
pub mod state;

pub use action::{ActionCallback, InvocationError, MenuAction};
pub use registry::{ActionRegistry, EXAMPLE_ACTION_CLASS, EXAMPLE_ACTION_NAME, EXAMPLE_LOG_MESSAGE};
pub use sink::{DiagnosticSink, RecordingSink, TracingSink};
pub use state::MenuState;
