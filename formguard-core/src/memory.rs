//! In-memory form controls.
//!
//! Reference implementations of [`FormControl`] for tests and headless
//! consumers. Real UI layers provide their own adapters over live widgets.

use crate::control::{ControlHandle, ControlKind, FormControl, ScrollTarget};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Event listeners keyed by event name.
#[derive(Default)]
struct Listeners {
    by_event: Mutex<HashMap<String, Vec<UnboundedSender<()>>>>,
}

impl Listeners {
    fn subscribe(&self, event: &str) -> UnboundedReceiver<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.by_event
            .lock()
            .entry(event.to_string())
            .or_default()
            .push(tx);
        rx
    }

    fn fire(&self, event: &str) {
        if let Some(senders) = self.by_event.lock().get_mut(event) {
            // drop listeners whose receiver side is gone
            senders.retain(|tx| tx.send(()).is_ok());
        }
    }
}

/// Text-carrying control, standing in for an input or text area.
#[derive(Default)]
pub struct TextInput {
    value: Mutex<String>,
    cached: Mutex<Option<String>>,
    focused: AtomicBool,
    scrolls: AtomicU32,
    label: Mutex<Option<Arc<dyn ScrollTarget>>>,
    listeners: Listeners,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Arc<Self> {
        let input = Self::default();
        *input.value.lock() = value.into();
        Arc::new(input)
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Shared handle usable by the validation registry.
    pub fn handle(self: &Arc<Self>) -> ControlHandle {
        self.clone()
    }

    /// Replace the live value, as user input would.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }

    /// Emit a named UI event to all subscribers.
    pub fn fire(&self, event: &str) {
        self.listeners.fire(event);
    }

    pub fn attach_label(&self, label: Arc<dyn ScrollTarget>) {
        *self.label.lock() = Some(label);
    }

    /// Last value the validator extracted, if any.
    pub fn cached_value(&self) -> Option<String> {
        self.cached.lock().clone()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    pub fn scroll_count(&self) -> u32 {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl ScrollTarget for TextInput {
    fn scroll_into_view(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

impl FormControl for TextInput {
    fn kind(&self) -> ControlKind {
        ControlKind::Text
    }

    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn set_cached_value(&self, value: String) {
        *self.cached.lock() = Some(value);
    }

    fn focus(&self) {
        self.focused.store(true, Ordering::SeqCst);
    }

    fn label(&self) -> Option<Arc<dyn ScrollTarget>> {
        self.label.lock().clone()
    }

    fn subscribe(&self, event: &str) -> Option<UnboundedReceiver<()>> {
        Some(self.listeners.subscribe(event))
    }
}

/// Single-selection control, standing in for a dropdown.
#[derive(Default)]
pub struct SelectInput {
    selected: Mutex<Option<String>>,
    cached: Mutex<Option<String>>,
    focused: AtomicBool,
    scrolls: AtomicU32,
    label: Mutex<Option<Arc<dyn ScrollTarget>>>,
    listeners: Listeners,
}

impl SelectInput {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_selected(value: impl Into<String>) -> Arc<Self> {
        let select = Self::default();
        *select.selected.lock() = Some(value.into());
        Arc::new(select)
    }

    /// Shared handle usable by the validation registry.
    pub fn handle(self: &Arc<Self>) -> ControlHandle {
        self.clone()
    }

    pub fn select(&self, value: impl Into<String>) {
        *self.selected.lock() = Some(value.into());
    }

    pub fn clear_selection(&self) {
        *self.selected.lock() = None;
    }

    /// Emit a named UI event to all subscribers.
    pub fn fire(&self, event: &str) {
        self.listeners.fire(event);
    }

    pub fn attach_label(&self, label: Arc<dyn ScrollTarget>) {
        *self.label.lock() = Some(label);
    }

    /// Last value the validator extracted, if any.
    pub fn cached_value(&self) -> Option<String> {
        self.cached.lock().clone()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    pub fn scroll_count(&self) -> u32 {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl ScrollTarget for SelectInput {
    fn scroll_into_view(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

impl FormControl for SelectInput {
    fn kind(&self) -> ControlKind {
        ControlKind::Selection
    }

    fn value(&self) -> String {
        self.selected.lock().clone().unwrap_or_default()
    }

    fn selected_value(&self) -> Option<String> {
        self.selected.lock().clone()
    }

    fn set_cached_value(&self, value: String) {
        *self.cached.lock() = Some(value);
    }

    fn focus(&self) {
        self.focused.store(true, Ordering::SeqCst);
    }

    fn label(&self) -> Option<Arc<dyn ScrollTarget>> {
        self.label.lock().clone()
    }

    fn subscribe(&self, event: &str) -> Option<UnboundedReceiver<()>> {
        Some(self.listeners.subscribe(event))
    }
}

/// Label stand-in that records scroll requests.
#[derive(Default)]
pub struct Label {
    scrolls: AtomicU32,
}

impl Label {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn scroll_count(&self) -> u32 {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl ScrollTarget for Label {
    fn scroll_into_view(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_value_roundtrip() {
        let input = TextInput::new("hello");
        assert_eq!(input.value(), "hello");

        input.set_value("world");
        assert_eq!(input.value(), "world");
    }

    #[test]
    fn test_cached_value_starts_empty() {
        let input = TextInput::new("hello");
        assert_eq!(input.cached_value(), None);

        input.set_cached_value("hello".to_string());
        assert_eq!(input.cached_value(), Some("hello".to_string()));
    }

    #[test]
    fn test_select_input_extraction() {
        let select = SelectInput::new();
        assert_eq!(select.selected_value(), None);

        select.select("blue");
        assert_eq!(select.selected_value(), Some("blue".to_string()));

        select.clear_selection();
        assert_eq!(select.selected_value(), None);
    }

    #[tokio::test]
    async fn test_fire_reaches_subscribers() {
        let input = TextInput::new("x");
        let mut rx = input.subscribe("input").unwrap();

        input.fire("input");
        input.fire("input");
        assert!(rx.recv().await.is_some());
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test]
    async fn test_fire_other_event_is_not_delivered() {
        let input = TextInput::new("x");
        let mut rx = input.subscribe("input").unwrap();

        input.fire("blur");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_label_records_scrolls() {
        let label = Label::new();
        assert_eq!(label.scroll_count(), 0);
        label.scroll_into_view();
        assert_eq!(label.scroll_count(), 1);
    }
}
