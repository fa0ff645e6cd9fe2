// fieldstate - form validation state container
// Field registry, reducer, and middleware chain for browser-rendered forms

pub mod action;
pub mod collab;
pub mod field;
pub mod middleware;
pub mod reducer;
pub mod state;
pub mod validator;

// Re-export core types
pub use action::{Action, Patch};
pub use collab::{AccountError, AccountService, CredentialCreated, EventRecorder, FlowEvents};
pub use field::{ElementError, ElementPayload, FieldKind, FieldRecord, FieldValue, Validity};
pub use middleware::{Middleware, Next};
pub use reducer::reduce;
pub use state::ValidatorState;
pub use validator::Validator;
