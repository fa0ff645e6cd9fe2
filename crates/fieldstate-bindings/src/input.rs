// File: src/input.rs
// Purpose: Text input binding - change and blur translation into updates

use fieldstate::{Action, FieldKind, FieldValue, Patch, Validator, Validity};

use crate::binding::Binding;
use crate::outcome::{Outcome, ValidateHook};
use crate::policy::{default_policy, REQUIRED_MESSAGE};

/// Binding for a plain text input
///
/// On change the raw text runs through the custom `on_validate` hook if
/// one was supplied, otherwise through the default input policy
/// (required means trimmed-non-empty). Blur re-checks the
/// required-and-empty case so the tooltip surfaces once the user leaves
/// the control.
pub struct InputBinding {
    name: String,
    required: bool,
    on_validate: Option<ValidateHook>,
}

impl InputBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            on_validate: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Supply a custom validation hook, overriding the default policy
    pub fn on_validate(mut self, hook: impl Fn(&FieldValue) -> Outcome + 'static) -> Self {
        self.on_validate = Some(Box::new(hook));
        self
    }

    /// Handle a value-change event from the control
    pub fn change(&self, validator: &mut Validator, raw: impl Into<String>) {
        let value = FieldValue::Text(raw.into());
        let (value, validity, error) = match &self.on_validate {
            Some(hook) => {
                let outcome = hook(&value);
                (outcome.value, outcome.validity, outcome.error)
            }
            None => {
                let verdict = default_policy(FieldKind::Input)(self.required, &value);
                (value, verdict.validity, verdict.error)
            }
        };
        validator.dispatch(Action::Update {
            name: self.name.clone(),
            value,
            validity,
            error,
        });
    }
}

impl Binding for InputBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Input
    }

    fn required(&self) -> bool {
        self.required
    }

    fn blur(&self, validator: &mut Validator) {
        if !self.required {
            return;
        }
        let Some(record) = validator.field(&self.name) else {
            return;
        };
        if record.value.is_empty() {
            let value = record.value.clone();
            validator.dispatch(Action::Update {
                name: self.name.clone(),
                value,
                validity: Some(Validity::Invalid),
                error: Patch::Set(REQUIRED_MESSAGE.to_string()),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mounted(binding: &InputBinding) -> Validator {
        let mut validator = Validator::new();
        binding.mount(&mut validator);
        validator
    }

    #[test]
    fn test_change_applies_default_required_policy() {
        let binding = InputBinding::new("email").required(true);
        let mut validator = mounted(&binding);

        binding.change(&mut validator, "a@b.c");
        let record = validator.field("email").unwrap();
        assert_eq!(record.validity, Validity::Valid);
        assert_eq!(record.error, None);

        binding.change(&mut validator, "   ");
        let record = validator.field("email").unwrap();
        assert_eq!(record.validity, Validity::Invalid);
        assert_eq!(record.error.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_optional_input_is_always_valid() {
        let binding = InputBinding::new("nickname");
        let mut validator = mounted(&binding);

        binding.change(&mut validator, "");
        assert_eq!(validator.field("nickname").unwrap().validity, Validity::Valid);
    }

    #[test]
    fn test_blur_surfaces_required_on_untouched_field() {
        let binding = InputBinding::new("email").required(true);
        let mut validator = mounted(&binding);

        binding.blur(&mut validator);
        let record = validator.field("email").unwrap();
        assert_eq!(record.validity, Validity::Invalid);
        assert_eq!(record.error.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_blur_leaves_filled_field_alone() {
        let binding = InputBinding::new("email").required(true);
        let mut validator = mounted(&binding);

        binding.change(&mut validator, "a@b.c");
        binding.blur(&mut validator);
        let record = validator.field("email").unwrap();
        assert_eq!(record.validity, Validity::Valid);
        assert_eq!(record.error, None);
    }

    #[test]
    fn test_hook_overrides_default_policy() {
        let binding = InputBinding::new("email").required(true).on_validate(|value| {
            let text = value.as_text().unwrap_or("").trim().to_lowercase();
            if text.contains('@') {
                Outcome::valid(text)
            } else {
                Outcome::invalid(text, "Valid email required")
            }
        });
        let mut validator = mounted(&binding);

        binding.change(&mut validator, "  A@B.C  ");
        let record = validator.field("email").unwrap();
        // Hook transformed the stored value
        assert_eq!(record.value, FieldValue::Text("a@b.c".to_string()));
        assert_eq!(record.validity, Validity::Valid);

        binding.change(&mut validator, "nope");
        let record = validator.field("email").unwrap();
        assert_eq!(record.validity, Validity::Invalid);
        assert_eq!(record.error.as_deref(), Some("Valid email required"));
    }
}
