//! Field registry and single-field validation dispatch.

use crate::rules::RuleSet;
use crate::watch::{self, WatcherHandle};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use formguard_core::{ControlHandle, ControlKind, FormConfig};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Callback invoked with a field's validity after each validation run.
pub type InvalidCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Registration options for one field.
#[derive(Debug, Clone)]
pub struct FieldOptions {
    pub(crate) name: String,
    pub(crate) rules: RuleSet,
    pub(crate) watch_event: Option<String>,
    pub(crate) debounce: Option<Duration>,
}

impl FieldOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: RuleSet::new(),
            watch_event: None,
            debounce: None,
        }
    }

    /// Rules evaluated against the field's value.
    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Re-validate on this UI event, debounced.
    ///
    /// The watcher task is spawned at bind time, which therefore requires a
    /// running tokio runtime.
    pub fn watch_event(mut self, event: impl Into<String>) -> Self {
        self.watch_event = Some(event.into());
        self
    }

    /// Per-field debounce override; falls back to
    /// [`FormConfig::default_debounce`].
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = Some(debounce);
        self
    }
}

/// One bound field: control, rules, callback, registration order.
#[derive(Clone)]
pub(crate) struct RegisteredField {
    pub(crate) control: ControlHandle,
    pub(crate) rules: RuleSet,
    pub(crate) invalid_callback: InvalidCallback,
    pub(crate) order: u64,
}

struct Inner {
    fields: DashMap<String, RegisteredField>,
    config: Mutex<FormConfig>,
    configured: AtomicBool,
    order: AtomicU64,
    watchers: Mutex<Vec<WatcherHandle>>,
}

/// Field registry and validation context.
///
/// An explicit, cheaply clonable handle owned by the UI composition layer:
/// [`configure`](Self::configure) on mount, [`clear`](Self::clear) on
/// unmount. Registrations are accepted only while configured; everything
/// else is a logged no-op.
#[derive(Clone)]
pub struct FormValidator {
    inner: Arc<Inner>,
}

impl FormValidator {
    /// Create an unconfigured registry. `register` bind functions are no-ops
    /// until [`configure`](Self::configure) runs.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                fields: DashMap::new(),
                config: Mutex::new(FormConfig::default()),
                configured: AtomicBool::new(false),
                order: AtomicU64::new(0),
                watchers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Create a registry that is already configured.
    pub fn with_config(config: FormConfig) -> Self {
        let validator = Self::new();
        validator.configure(config);
        validator
    }

    /// Apply configuration and start accepting registrations.
    pub fn configure(&self, config: FormConfig) {
        debug!(?config, "configuring form validator");
        *self.inner.config.lock() = config;
        self.inner.configured.store(true, Ordering::SeqCst);
    }

    pub(crate) fn config(&self) -> FormConfig {
        *self.inner.config.lock()
    }

    /// Register a field and get its bind function.
    ///
    /// The returned closure accepts the live control handle. `None` handles,
    /// duplicate names, and unconfigured registries are silently ignored;
    /// the first successful call binds the field exactly once.
    pub fn register<F>(
        &self,
        options: FieldOptions,
        invalid_callback: F,
    ) -> impl Fn(Option<ControlHandle>) + Send + Sync + use<F>
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let validator = self.clone();
        let options = Arc::new(options);
        let callback: InvalidCallback = Arc::new(invalid_callback);
        move |handle| {
            if let Some(control) = handle {
                validator.bind(&options, control, callback.clone());
            }
        }
    }

    fn bind(&self, options: &FieldOptions, control: ControlHandle, callback: InvalidCallback) {
        if !self.inner.configured.load(Ordering::SeqCst) {
            warn!(field = %options.name, "registry not configured, ignoring bind");
            return;
        }
        match self.inner.fields.entry(options.name.clone()) {
            Entry::Occupied(_) => {
                debug!(field = %options.name, "field already bound, ignoring");
            }
            Entry::Vacant(entry) => {
                let order = self.inner.order.fetch_add(1, Ordering::SeqCst);
                entry.insert(RegisteredField {
                    control: control.clone(),
                    rules: options.rules.clone(),
                    invalid_callback: callback,
                    order,
                });
                debug!(field = %options.name, order, "field bound");
                if let Some(event) = &options.watch_event {
                    self.spawn_watcher(&options.name, event, &control, options.debounce);
                }
            }
        }
    }

    fn spawn_watcher(
        &self,
        name: &str,
        event: &str,
        control: &ControlHandle,
        debounce: Option<Duration>,
    ) {
        let Some(events) = control.subscribe(event) else {
            warn!(field = %name, event, "control does not emit event, skipping watch");
            return;
        };
        let debounce = debounce.unwrap_or(self.config().default_debounce);
        let handle = watch::spawn(self.clone(), name.to_string(), events, debounce);
        self.inner.watchers.lock().push(handle);
    }

    /// Stored control for a field, `None` when absent. Never panics.
    pub fn get_ref(&self, name: &str) -> Option<ControlHandle> {
        self.inner.fields.get(name).map(|field| field.control.clone())
    }

    /// Validate one field by name; `None` when the name is unknown.
    pub fn validate_field(&self, name: &str) -> Option<bool> {
        let field = self.inner.fields.get(name).map(|entry| entry.value().clone())?;
        Some(validate_control(&field))
    }

    /// Validate one field and report the result through its callback.
    pub fn watch_field(&self, name: &str) {
        let Some(field) = self.inner.fields.get(name).map(|entry| entry.value().clone()) else {
            debug!(field = %name, "watch on unknown field ignored");
            return;
        };
        let valid = validate_control(&field);
        (field.invalid_callback)(valid);
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Clone-out of every bound field, so callbacks run without map locks.
    pub(crate) fn snapshot(&self) -> Vec<(String, RegisteredField)> {
        self.inner
            .fields
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Cancel every watcher and drop every registered field.
    ///
    /// Pending debounce timers never fire afterwards. Safe to call multiple
    /// times; the registry stays configured, so fields may be re-registered.
    pub fn clear(&self) {
        let watchers: Vec<WatcherHandle> =
            self.inner.watchers.lock().drain(..).collect();
        for watcher in &watchers {
            watcher.cancel();
        }
        self.inner.fields.clear();
        self.inner.order.store(0, Ordering::SeqCst);
        info!("form validator cleared");
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation dispatch for one bound field.
///
/// Extracts the current value for the control's kind, writes it back onto
/// the control as the cached current value, and evaluates the rule set. An
/// empty extracted value is invalid outright.
pub(crate) fn validate_control(field: &RegisteredField) -> bool {
    let kind = field.control.kind();
    let value = match kind {
        ControlKind::Text => field.control.value(),
        ControlKind::Selection => field.control.selected_value().unwrap_or_default(),
    };
    field.control.set_cached_value(value.clone());
    if value.is_empty() {
        return false;
    }
    field.rules.evaluate(kind, &value)
}
