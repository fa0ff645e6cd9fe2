// File: src/field.rs
// Purpose: Per-field data model - kinds, values, validity, and the field record

use serde::{Deserialize, Serialize};

/// Kind of form control a field is bound to
///
/// Selects the default validation policy. Fixed at registration; a
/// re-registration under the same name with a different kind is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Plain text input
    Input,
    /// Externally-hosted payment element reporting its own validation result
    PaymentElement,
    /// Boolean checkbox
    Checkbox,
}

/// Tri-state validity of a field
///
/// `Unknown` means the field has not received a single validation
/// evaluation yet (no change, blur, or explicit update).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    /// True only for an affirmative verdict; `Unknown` is not valid
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Value payload of a field, tagged by the shape its control produces
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValue {
    /// No value supplied yet
    #[default]
    Empty,
    /// Text input contents
    Text(String),
    /// Checkbox checked state
    Checked(bool),
    /// Structured result reported by a hosted payment element
    Element(ElementPayload),
}

impl FieldValue {
    /// Text contents, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Checked state, if this is a checkbox value
    pub fn as_checked(&self) -> Option<bool> {
        match self {
            FieldValue::Checked(b) => Some(*b),
            _ => None,
        }
    }

    /// Element payload, if this is a payment-element value
    pub fn as_element(&self) -> Option<&ElementPayload> {
        match self {
            FieldValue::Element(p) => Some(p),
            _ => None,
        }
    }

    /// True when no meaningful value has been supplied
    ///
    /// Text counts as empty when it trims to nothing; an unchecked box and
    /// an element that never reported are empty as well.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Checked(b) => !b,
            FieldValue::Element(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Checked(b)
    }
}

impl From<ElementPayload> for FieldValue {
    fn from(p: ElementPayload) -> Self {
        FieldValue::Element(p)
    }
}

/// Result object reported by a hosted payment element's change callback
///
/// The element owns its own validation; this payload is its verdict.
/// Unrecognized members are preserved in `extra` so the payload round-trips
/// whatever the host page handed over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPayload {
    /// The element finished its internal validation successfully
    pub complete: bool,
    /// The element currently holds no user input
    pub empty: bool,
    /// Validation error reported by the element, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ElementError>,
    /// Members of the payload this library does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error member of an [`ElementPayload`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementError {
    /// Human-readable message from the element
    pub message: String,
    /// Machine-readable code, when the element supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Validation snapshot of one registered field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Control kind, fixed at registration
    pub kind: FieldKind,
    /// Whether the field must be valid for submission, fixed at registration
    pub required: bool,
    /// Current value payload
    pub value: FieldValue,
    /// Current validity verdict
    pub validity: Validity,
    /// Current error message, if any
    pub error: Option<String>,
}

impl FieldRecord {
    /// Post-registration default record for a field of the given shape
    pub fn registered(kind: FieldKind, required: bool) -> Self {
        Self {
            kind,
            required,
            value: FieldValue::Empty,
            validity: Validity::Unknown,
            error: None,
        }
    }

    /// Reset value, validity, and error to their post-registration defaults
    ///
    /// `kind` and `required` are registration-time facts and survive a reset.
    pub fn reset(&mut self) {
        self.value = FieldValue::Empty;
        self.validity = Validity::Unknown;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registered_record_defaults() {
        let record = FieldRecord::registered(FieldKind::Input, true);
        assert_eq!(record.value, FieldValue::Empty);
        assert_eq!(record.validity, Validity::Unknown);
        assert_eq!(record.error, None);
        assert!(record.required);
    }

    #[test]
    fn test_reset_preserves_registration_facts() {
        let mut record = FieldRecord::registered(FieldKind::Checkbox, true);
        record.value = FieldValue::Checked(true);
        record.validity = Validity::Valid;
        record.error = Some("stale".to_string());

        record.reset();

        assert_eq!(record.kind, FieldKind::Checkbox);
        assert!(record.required);
        assert_eq!(record.value, FieldValue::Empty);
        assert_eq!(record.validity, Validity::Unknown);
        assert_eq!(record.error, None);
    }

    #[test]
    fn test_field_value_emptiness() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::Text("   ".to_string()).is_empty());
        assert!(!FieldValue::Text("x".to_string()).is_empty());
        assert!(FieldValue::Checked(false).is_empty());
        assert!(!FieldValue::Checked(true).is_empty());
        assert!(!FieldValue::Element(ElementPayload::default()).is_empty());
    }

    #[test]
    fn test_element_payload_from_host_json() {
        let payload: ElementPayload = serde_json::from_value(serde_json::json!({
            "complete": false,
            "empty": false,
            "error": { "message": "Your card number is incomplete.", "code": "incomplete_number" },
            "elementType": "card"
        }))
        .unwrap();

        assert!(!payload.complete);
        let error = payload.error.expect("error member");
        assert_eq!(error.message, "Your card number is incomplete.");
        assert_eq!(error.code.as_deref(), Some("incomplete_number"));
        // Unknown members survive in extra
        assert_eq!(
            payload.extra.get("elementType").and_then(|v| v.as_str()),
            Some("card")
        );
    }

    #[test]
    fn test_element_payload_absent_members_default() {
        let payload: ElementPayload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(!payload.complete);
        assert!(!payload.empty);
        assert!(payload.error.is_none());
    }

    #[test]
    fn test_validity_is_valid_only_for_valid() {
        assert!(Validity::Valid.is_valid());
        assert!(!Validity::Invalid.is_valid());
        assert!(!Validity::Unknown.is_valid());
    }
}
