//! Form-level validation runner.

use crate::registry::{validate_control, FormValidator};
use formguard_core::{AfterAction, ControlHandle};
use serde::Serialize;
use tracing::debug;

/// Outcome of one field in a form-level run.
#[derive(Debug, Clone, Serialize)]
pub struct FieldReport {
    pub name: String,
    pub invalid: bool,
    pub order: u64,
}

/// Per-field outcomes of a form-level validation pass, ordered by
/// registration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub fields: Vec<FieldReport>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| !field.invalid)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "fields": self.fields,
        })
    }
}

impl FormValidator {
    /// Validate every registered field, report through each field's
    /// callback, and perform the configured post-action when any field
    /// fails.
    ///
    /// Returns true iff the whole form is valid. Registry state is not
    /// mutated.
    pub fn validate_form(&self) -> bool {
        let mut outcomes: Vec<(bool, ControlHandle, u64)> = Vec::new();

        let mut fields = self.snapshot();
        fields.sort_by_key(|(_, field)| field.order);
        for (name, field) in fields {
            let valid = validate_control(&field);
            (field.invalid_callback)(valid);
            debug!(field = %name, valid, "form-level validation");
            outcomes.push((!valid, field.control, field.order));
        }

        let is_valid = outcomes.iter().all(|(invalid, _, _)| !invalid);
        if !is_valid {
            // first invalid field by registration order
            let first = outcomes
                .iter()
                .filter(|(invalid, _, _)| *invalid)
                .min_by_key(|(_, _, order)| *order);
            if let Some((_, control, order)) = first {
                debug!(order = *order, "form invalid, applying after action");
                match self.config().after_action {
                    AfterAction::None => {}
                    AfterAction::ScrollToFieldOrLabel => scroll_to_invalid(control),
                }
            }
        }

        is_valid
    }

    /// Run the dispatcher over every field without invoking callbacks or the
    /// post-action.
    pub fn validation_report(&self) -> ValidationReport {
        let mut fields: Vec<FieldReport> = self
            .snapshot()
            .into_iter()
            .map(|(name, field)| FieldReport {
                invalid: !validate_control(&field),
                order: field.order,
                name,
            })
            .collect();
        fields.sort_by_key(|field| field.order);
        ValidationReport { fields }
    }
}

/// Scroll to the field's label when it has one, else the field itself, then
/// focus the field.
fn scroll_to_invalid(control: &ControlHandle) {
    match control.label() {
        Some(label) => label.scroll_into_view(),
        None => control.scroll_into_view(),
    }
    control.focus();
}
