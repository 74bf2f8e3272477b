//! Form control abstraction.

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Shape of a bound control, deciding how its current value is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Text-carrying input (text field, text area).
    Text,
    /// Single-selection input (dropdown).
    Selection,
}

/// Anything the form runner can scroll into view.
pub trait ScrollTarget: Send + Sync {
    fn scroll_into_view(&self);
}

/// Opaque handle to a live UI form control.
///
/// The validation core never owns UI elements; it talks to them through this
/// trait. Implementations must be cheap to query and safe to call from the
/// runtime's worker threads.
pub trait FormControl: ScrollTarget {
    /// What shape of control this is.
    fn kind(&self) -> ControlKind;

    /// Raw string value of a text-like control.
    fn value(&self) -> String;

    /// Value of the first selected option, for selection controls.
    fn selected_value(&self) -> Option<String> {
        None
    }

    /// Cache the last extracted value on the control.
    ///
    /// Observable by UI collaborators; the validator itself never reads it
    /// back.
    fn set_cached_value(&self, _value: String) {}

    /// Move input focus to this control.
    fn focus(&self);

    /// Associated label, if the control has one.
    fn label(&self) -> Option<Arc<dyn ScrollTarget>> {
        None
    }

    /// Subscribe to a named UI event on this control.
    ///
    /// Returns `None` when the control does not emit the event.
    fn subscribe(&self, _event: &str) -> Option<UnboundedReceiver<()>> {
        None
    }
}

/// Shared handle to a form control.
pub type ControlHandle = Arc<dyn FormControl>;
