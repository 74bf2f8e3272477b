//! Core abstractions for the formguard validation library.
//!
//! Defines the [`FormControl`] seam between the validation registry and a UI
//! layer, the configuration surface applied once per mount lifecycle, and
//! in-memory reference controls for tests and headless consumers.

pub mod config;
pub mod control;
pub mod memory;

pub use config::{AfterAction, FormConfig};
pub use control::{ControlHandle, ControlKind, FormControl, ScrollTarget};
pub use memory::{Label, SelectInput, TextInput};
