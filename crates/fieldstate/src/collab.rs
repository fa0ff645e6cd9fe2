// File: src/collab.rs
// Purpose: Collaborator interfaces the hosting form wires in explicitly

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

/// Sink for flow metrics events, keyed by flow and event name
///
/// Implemented by the hosting application; this crate only invokes it
/// around submit/success/failure moments.
pub trait FlowEvents {
    fn record(&self, flow: &str, event: &str);
}

/// Recorder wrapping an optionally-wired [`FlowEvents`] sink
///
/// Constructed and passed in explicitly by the hosting form. A missing
/// sink is treated as a no-op success so a misconfigured host never
/// breaks validation, but it is logged so production can alert on it.
#[derive(Clone)]
pub struct EventRecorder {
    sink: Option<Arc<dyn FlowEvents>>,
}

impl EventRecorder {
    pub fn new(sink: Arc<dyn FlowEvents>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Recorder with no sink wired; every record call is a logged no-op
    pub fn disconnected() -> Self {
        Self { sink: None }
    }

    pub fn record(&self, flow: &str, event: &str) {
        match &self.sink {
            Some(sink) => sink.record(flow, event),
            None => {
                warn!(%flow, %event, "no flow-event sink wired; dropping event");
            }
        }
    }
}

impl std::fmt::Debug for EventRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRecorder")
            .field("wired", &self.sink.is_some())
            .finish()
    }
}

/// Failure kinds an account service operation can report
///
/// The hosting form decides whether a kind maps to a field-level error
/// or a form-level banner; this crate only fixes the taxonomy and the
/// default user-facing wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("incorrect credential")]
    IncorrectCredential,
    #[error("rate limited")]
    RateLimited,
    #[error("unexpected error")]
    Unexpected,
}

impl AccountError {
    /// Default message shown to the end user for this failure kind
    pub fn user_message(&self) -> &'static str {
        match self {
            AccountError::IncorrectCredential => "Incorrect password",
            AccountError::RateLimited => "You've tried too many times. Please try again later.",
            AccountError::Unexpected => "Unexpected error",
        }
    }
}

/// Successful result of a credential or key creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCreated {
    /// Opaque identifier of the created credential
    pub id: String,
}

/// Account operations the hosting form invokes after the submit gate opens
///
/// Out of scope for this crate beyond the interface; the host supplies
/// the implementation.
pub trait AccountService {
    fn create_credential(&self, secret: &str) -> Result<CredentialCreated, AccountError>;
}
