// fieldstate-bindings - control adapters for the fieldstate validator
// Input, checkbox, and hosted payment-element bindings plus default policies

pub mod binding;
pub mod checkbox;
pub mod element;
pub mod input;
pub mod outcome;
pub mod policy;

// Re-export binding types
pub use binding::Binding;
pub use checkbox::CheckboxBinding;
pub use element::ElementBinding;
pub use input::InputBinding;
pub use outcome::{Outcome, ValidateHook};
pub use policy::{default_policy, strip_trailing_period, PolicyFn, Verdict, REQUIRED_MESSAGE};

// Re-export the core container so callers need only one crate
pub use fieldstate::{Action, FieldKind, FieldRecord, FieldValue, Validator, ValidatorState, Validity};
