// File: src/outcome.rs
// Purpose: Result contract for caller-supplied on_validate hooks

use fieldstate::{FieldValue, Patch, Validity};

/// What a custom `on_validate` hook decided about a raw value
///
/// The hook may transform the value before it is stored. Leaving
/// `validity`/`error` unspecified preserves whatever the field already
/// had, matching the update semantics of the core reducer.
pub struct Outcome {
    /// Value to store, possibly transformed from the raw input
    pub value: FieldValue,
    /// Verdict, or `None` to preserve the prior one
    pub validity: Option<Validity>,
    /// Error message instruction
    pub error: Patch<String>,
}

impl Outcome {
    /// Affirmative verdict; clears any leftover error
    pub fn valid(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            validity: Some(Validity::Valid),
            error: Patch::Clear,
        }
    }

    /// Negative verdict with a message for the tooltip
    pub fn invalid(value: impl Into<FieldValue>, message: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            validity: Some(Validity::Invalid),
            error: Patch::Set(message.into()),
        }
    }

    /// Store the value without changing the verdict or error
    pub fn value_only(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            validity: None,
            error: Patch::Keep,
        }
    }
}

/// Boxed validation hook supplied by the hosting form
pub type ValidateHook = Box<dyn Fn(&FieldValue) -> Outcome>;
