// File: src/element.rs
// Purpose: Hosted payment-element binding - the element validates itself,
// this binding reads back its verdict

use fieldstate::{Action, ElementPayload, FieldKind, FieldValue, Patch, Validator, Validity};

use crate::binding::Binding;
use crate::outcome::{Outcome, ValidateHook};
use crate::policy::default_policy;

/// Binding for an externally-hosted payment element
///
/// The element runs its own validation on the host page and reports a
/// structured payload through a change callback. Until it reports
/// `complete` (or an error) the field stays at `Unknown`. Blur on a
/// required field that never reported synthesizes a required failure
/// worded with the field's label.
pub struct ElementBinding {
    name: String,
    label: String,
    required: bool,
    on_validate: Option<ValidateHook>,
}

impl ElementBinding {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            required: false,
            on_validate: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Display label used when synthesizing the required message
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Supply a custom validation hook, overriding the default element policy
    pub fn on_validate(mut self, hook: impl Fn(&FieldValue) -> Outcome + 'static) -> Self {
        self.on_validate = Some(Box::new(hook));
        self
    }

    /// Handle the element's change callback
    ///
    /// `None` models a null payload from the host page: the value is
    /// recorded as absent and no verdict is rendered.
    pub fn element_change(&self, validator: &mut Validator, payload: Option<ElementPayload>) {
        let value = match payload {
            Some(p) => FieldValue::Element(p),
            None => FieldValue::Empty,
        };
        let (value, validity, error) = match &self.on_validate {
            Some(hook) => {
                let outcome = hook(&value);
                (outcome.value, outcome.validity, outcome.error)
            }
            None => {
                let verdict = default_policy(FieldKind::PaymentElement)(self.required, &value);
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

impl Binding for ElementBinding {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::PaymentElement
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
        // Only a field the element never reported into gets the synthesized failure
        if matches!(record.value, FieldValue::Empty) {
            validator.dispatch(Action::Update {
                name: self.name.clone(),
                value: FieldValue::Empty,
                validity: Some(Validity::Invalid),
                error: Patch::Set(format!("{} is required", self.label)),
            });
        }
    }
}
