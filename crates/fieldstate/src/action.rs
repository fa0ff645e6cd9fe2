// File: src/action.rs
// Purpose: Action vocabulary dispatched against the validator state

use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FieldValue, Validity};

/// Keep/clear/set instruction for an optional slot in an update
///
/// `Update` actions that leave the error unspecified must preserve the
/// prior message, which `Option` alone cannot express.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Patch<T> {
    /// Preserve the prior value
    #[default]
    Keep,
    /// Explicitly clear the slot
    Clear,
    /// Replace the slot's contents
    Set(T),
}

impl<T> Patch<T> {
    /// Apply this patch over the prior contents of the slot
    pub fn apply(self, prior: Option<T>) -> Option<T> {
        match self {
            Patch::Keep => prior,
            Patch::Clear => None,
            Patch::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }
}

/// A state transition request against a [`Validator`](crate::Validator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Insert a field record with post-registration defaults
    ///
    /// Idempotent per name; a conflicting `kind` for an existing name is
    /// rejected with a warning.
    #[serde(rename_all = "camelCase")]
    Register {
        name: String,
        kind: FieldKind,
        required: bool,
    },
    /// Replace a field's value and optionally its validity and error
    ///
    /// `validity: None` and `error: Patch::Keep` preserve the prior state.
    /// Unregistered names are ignored with a warning.
    #[serde(rename_all = "camelCase")]
    Update {
        name: String,
        value: FieldValue,
        validity: Option<Validity>,
        error: Patch<String>,
    },
    /// Set or clear the top-level form error
    SetFormError(Option<String>),
    /// Return every field to its post-registration default state
    Reset,
}

impl Action {
    /// Convenience constructor for a registration
    pub fn register(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Action::Register {
            name: name.into(),
            kind,
            required,
        }
    }

    /// Convenience constructor for a full update (value, verdict, and error)
    pub fn update(
        name: impl Into<String>,
        value: impl Into<FieldValue>,
        validity: Validity,
        error: Option<String>,
    ) -> Self {
        Action::Update {
            name: name.into(),
            value: value.into(),
            validity: Some(validity),
            error: error.into(),
        }
    }

    /// Convenience constructor for a value-only update
    ///
    /// Validity and error are preserved from the prior state.
    pub fn update_value(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Action::Update {
            name: name.into(),
            value: value.into(),
            validity: None,
            error: Patch::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_apply() {
        assert_eq!(Patch::Keep.apply(Some("prior".to_string())), Some("prior".to_string()));
        assert_eq!(Patch::<String>::Clear.apply(Some("prior".to_string())), None);
        assert_eq!(
            Patch::Set("new".to_string()).apply(Some("prior".to_string())),
            Some("new".to_string())
        );
        assert_eq!(Patch::<String>::Keep.apply(None), None);
    }

    #[test]
    fn test_patch_from_option() {
        assert_eq!(Patch::from(Some("e".to_string())), Patch::Set("e".to_string()));
        assert_eq!(Patch::<String>::from(None), Patch::Clear);
    }

    #[test]
    fn test_update_constructor_sets_explicit_slots() {
        let action = Action::update("foo", "bar", Validity::Valid, None);
        match action {
            Action::Update {
                name,
                value,
                validity,
                error,
            } => {
                assert_eq!(name, "foo");
                assert_eq!(value, FieldValue::Text("bar".to_string()));
                assert_eq!(validity, Some(Validity::Valid));
                // None maps to an explicit clear, not a keep
                assert_eq!(error, Patch::Clear);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }

    #[test]
    fn test_update_value_preserves_verdict() {
        let action = Action::update_value("foo", "bar");
        match action {
            Action::Update { validity, error, .. } => {
                assert_eq!(validity, None);
                assert_eq!(error, Patch::Keep);
            }
            other => panic!("expected update, got {other:?}"),
        }
    }
}
