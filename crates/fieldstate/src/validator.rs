// File: src/validator.rs
// Purpose: The validator container owning the state and middleware chain

use crate::action::Action;
use crate::field::FieldRecord;
use crate::middleware::{run_chain, Middleware};
use crate::state::ValidatorState;

/// State container for one form's validation lifecycle
///
/// Constructed once per form and passed down explicitly to whatever
/// needs it; there is no ambient registry. The middleware chain is
/// fixed at construction. Dispatch is synchronous: the committed state
/// is readable immediately after, and the Nth dispatch always observes
/// the result of the (N-1)th.
pub struct Validator {
    state: ValidatorState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Validator {
    /// A validator with no middleware
    pub fn new() -> Self {
        Self::with_middleware(Vec::new())
    }

    /// A validator with an interceptor chain, applied in the given order
    pub fn with_middleware(middleware: Vec<Box<dyn Middleware>>) -> Self {
        Self {
            state: ValidatorState::new(),
            middleware,
        }
    }

    /// Run one transition through the chain and commit the result
    pub fn dispatch(&mut self, action: Action) {
        let next = run_chain(&mut self.middleware, &self.state, &action);
        self.state = next;
    }

    /// The committed state after the most recent dispatch
    pub fn state(&self) -> &ValidatorState {
        &self.state
    }

    /// Record for a field, if registered
    pub fn field(&self, name: &str) -> Option<&FieldRecord> {
        self.state.field(name)
    }

    /// Derived submit gate over the committed state
    pub fn submit_enabled(&self) -> bool {
        self.state.submit_enabled()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("state", &self.state)
            .field("middleware", &self.middleware.len())
            .finish()
    }
}
