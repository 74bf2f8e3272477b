//! Form validation registry for formguard.
//!
//! Binds UI form controls to named validation rules, re-validates on
//! debounced UI events, and reports per-field validity through caller
//! callbacks. Invalid states degrade to `false` or `None`; nothing here
//! panics or throws.
//!
//! # Examples
//!
//! ```
//! use formguard_core::{FormConfig, TextInput};
//! use formguard_validation::{FieldOptions, FormValidator, RuleSet};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let validator = FormValidator::with_config(FormConfig::default());
//!
//! let valid = Arc::new(AtomicBool::new(false));
//! let seen = valid.clone();
//! let bind = validator.register(
//!     FieldOptions::new("email").rules(RuleSet::new().is_email(true)),
//!     move |ok| seen.store(ok, Ordering::SeqCst),
//! );
//!
//! let input = TextInput::new("user@example.com");
//! bind(Some(input.handle()));
//!
//! assert!(validator.validate_form());
//! assert!(valid.load(Ordering::SeqCst));
//! ```
//!
//! ## Negated predicates
//!
//! Boolean rules compare the configured expectation against the predicate
//! outcome, so `false` means "must not match":
//!
//! ```
//! use formguard_core::ControlKind;
//! use formguard_validation::RuleSet;
//!
//! let not_digits = RuleSet::new().is_digit(false);
//! assert!(not_digits.evaluate(ControlKind::Text, "abc"));
//! assert!(!not_digits.evaluate(ControlKind::Text, "123"));
//! ```

mod errors;
mod form;
mod registry;
mod rules;
mod validators;
mod watch;

pub use errors::*;
pub use form::*;
pub use registry::*;
pub use rules::*;
pub use validators::*;
