// Formguard - client-side form validation for Rust UI layers
//
// Binds UI form controls to named validation rules and reports per-field
// validity through caller-supplied callbacks.

// Re-export core abstractions
pub use formguard_core::*;

// Re-export the validation registry
pub use formguard_validation::*;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        AfterAction, ControlHandle, ControlKind, FieldOptions, FormConfig, FormControl,
        FormValidator, Rule, RuleSet,
    };
}
