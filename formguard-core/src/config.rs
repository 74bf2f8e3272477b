//! Validator configuration.

use std::time::Duration;

/// What the form runner does after a failed form-level validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterAction {
    /// Do nothing.
    None,
    /// Scroll to the first invalid field (or its label) and focus it.
    #[default]
    ScrollToFieldOrLabel,
}

/// Configuration applied once per mount lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// Post-action performed when form-level validation fails.
    pub after_action: AfterAction,

    /// Debounce window for watched fields without a per-field override.
    pub default_debounce: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            after_action: AfterAction::ScrollToFieldOrLabel,
            default_debounce: Duration::from_millis(200),
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the post-action for failed form-level validation.
    pub fn after_action(mut self, action: AfterAction) -> Self {
        self.after_action = action;
        self
    }

    /// Set the process-wide default debounce window.
    pub fn default_debounce(mut self, debounce: Duration) -> Self {
        self.default_debounce = debounce;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.after_action, AfterAction::ScrollToFieldOrLabel);
        assert_eq!(config.default_debounce, Duration::from_millis(200));
    }

    #[test]
    fn test_builder() {
        let config = FormConfig::new()
            .after_action(AfterAction::None)
            .default_debounce(Duration::from_millis(50));
        assert_eq!(config.after_action, AfterAction::None);
        assert_eq!(config.default_debounce, Duration::from_millis(50));
    }
}
