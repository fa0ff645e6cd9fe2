// File: src/binding.rs
// Purpose: Common capability surface shared by all field bindings

use fieldstate::{Action, FieldKind, Validator};

/// Capabilities every field binding provides over its validator
///
/// A binding registers its field on mount, reads the current record
/// back to render validity/error affordances, and dispatches updates in
/// response to control events. Each variant adds its own change entry
/// point on top of this surface.
pub trait Binding {
    /// Registered field name
    fn name(&self) -> &str;

    /// Control kind, fixed per binding type
    fn kind(&self) -> FieldKind;

    /// Whether the bound field is required for submission
    fn required(&self) -> bool;

    /// Register the field; idempotent, called on first render
    fn mount(&self, validator: &mut Validator) {
        validator.dispatch(Action::register(self.name(), self.kind(), self.required()));
    }

    /// Handle the control losing focus
    fn blur(&self, validator: &mut Validator);
}
