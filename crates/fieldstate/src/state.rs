// File: src/state.rs
// Purpose: The validator state tree and the derived submit gate

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldRecord;

/// The full state tree of one form's validator
///
/// One record per registered field name plus a form-level error that is
/// not tied to any single field (e.g. a submission failure banner).
/// Every dispatch produces a fresh tree; consumers never observe an
/// in-place mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidatorState {
    /// Registered fields by name
    pub fields: HashMap<String, FieldRecord>,
    /// Form-level error, independent of any field
    pub error: Option<String>,
}

impl ValidatorState {
    /// Empty state with no registered fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for a field, if registered
    pub fn field(&self, name: &str) -> Option<&FieldRecord> {
        self.fields.get(name)
    }

    /// Whether a field name has been registered
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Error message for a field, if one is set
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|f| f.error.as_deref())
    }

    /// Whether any field currently carries an error message
    pub fn has_field_errors(&self) -> bool {
        self.fields.values().any(|f| f.error.is_some())
    }

    /// Derived submit gate: true iff every required field is affirmatively valid
    ///
    /// Computed from the current tree on every call; never cached. A
    /// required field still at `Unknown` keeps the gate closed.
    pub fn submit_enabled(&self) -> bool {
        self.fields
            .values()
            .filter(|f| f.required)
            .all(|f| f.validity.is_valid())
    }
}
