// File: src/checkbox.rs
// Purpose: Checkbox binding - validity recomputed on every toggle

use fieldstate::{Action, FieldKind, FieldValue, Validator};

use crate::binding::Binding;
use crate::policy::default_policy;

/// Binding for a boolean checkbox
///
/// A required checkbox is valid only while checked; every toggle
/// recomputes the verdict. Blur is a no-op, the checked state is the
/// whole story.
pub struct CheckboxBinding {
    name: String,
    required: bool,
}

impl CheckboxBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Handle a toggle event from the control
    pub fn toggle(&self, validator: &mut Validator, checked: bool) {
        let value = FieldValue::Checked(checked);
        let verdict = default_policy(FieldKind::Checkbox)(self.required, &value);
        validator.dispatch(Action::Update {
            name: self.name.clone(),
            value,
            validity: verdict.validity,
            error: verdict.error,
        });
    }
}

impl Binding for CheckboxBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Checkbox
    }

    fn required(&self) -> bool {
        self.required
    }

    fn blur(&self, _validator: &mut Validator) {}
}
