// File: src/policy.rs
// Purpose: Default validation policies, one per field kind, selected by lookup table

use std::collections::HashMap;

use once_cell::sync::Lazy;

use fieldstate::{FieldKind, FieldValue, Patch, Validity};

/// Standard message for a required field left empty
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Verdict a default policy renders for a candidate value
///
/// `validity: None` means the policy has no verdict yet and the field's
/// prior state is preserved (a payment element that has not finished its
/// own validation).
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub validity: Option<Validity>,
    pub error: Patch<String>,
}

impl Verdict {
    fn valid() -> Self {
        Self {
            validity: Some(Validity::Valid),
            error: Patch::Clear,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            validity: Some(Validity::Invalid),
            error: Patch::Set(message.into()),
        }
    }

    fn undecided() -> Self {
        Self {
            validity: None,
            error: Patch::Keep,
        }
    }
}

/// Default policy signature: registration facts plus the candidate value
pub type PolicyFn = fn(required: bool, value: &FieldValue) -> Verdict;

static DEFAULT_POLICIES: Lazy<HashMap<FieldKind, PolicyFn>> = Lazy::new(|| {
    HashMap::from([
        (FieldKind::Input, input_policy as PolicyFn),
        (FieldKind::Checkbox, checkbox_policy as PolicyFn),
        (FieldKind::PaymentElement, element_policy as PolicyFn),
    ])
});

/// The default policy for a field kind
pub fn default_policy(kind: FieldKind) -> PolicyFn {
    DEFAULT_POLICIES[&kind]
}

/// Required inputs are valid iff the trimmed text is non-empty;
/// optional inputs are always valid.
fn input_policy(required: bool, value: &FieldValue) -> Verdict {
    if required && value.is_empty() {
        Verdict::invalid(REQUIRED_MESSAGE)
    } else {
        Verdict::valid()
    }
}

/// A required checkbox must be checked; validity recomputes every toggle.
fn checkbox_policy(required: bool, value: &FieldValue) -> Verdict {
    if required && !value.as_checked().unwrap_or(false) {
        Verdict::invalid(REQUIRED_MESSAGE)
    } else {
        Verdict::valid()
    }
}

/// The hosted element owns its validation; this policy only reads its verdict.
///
/// No payload, or an incomplete payload without an error, is not a
/// verdict yet. An element error message is normalized by stripping a
/// single trailing period before it reaches the tooltip.
fn element_policy(_required: bool, value: &FieldValue) -> Verdict {
    let Some(payload) = value.as_element() else {
        return Verdict::undecided();
    };
    if let Some(error) = &payload.error {
        return Verdict::invalid(strip_trailing_period(&error.message));
    }
    if payload.complete {
        Verdict::valid()
    } else {
        Verdict::undecided()
    }
}

/// Cosmetic normalization for element error messages
pub fn strip_trailing_period(message: &str) -> &str {
    message.strip_suffix('.').unwrap_or(message)
}
