// File: src/middleware.rs
// Purpose: Ordered transition interceptors wrapped around the core reducer

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::ValidatorState;

/// A transition interceptor
///
/// Each middleware sees the committed prior state and the action, and
/// decides what state the transition yields. Calling [`Next::run`]
/// invokes the rest of the chain (the core reducer innermost) and hands
/// back its result, which the middleware may return as-is, transform, or
/// capture for external inspection. Returning without calling `next`
/// vetoes the transition; that is a supported pattern, not an error.
pub trait Middleware {
    fn handle(&mut self, prev: &ValidatorState, action: &Action, next: &mut Next<'_>) -> ValidatorState;
}

/// Handle to the remainder of the middleware chain
pub struct Next<'a> {
    rest: &'a mut [Box<dyn Middleware>],
}

impl<'a> Next<'a> {
    /// Entry point over a full chain; the reducer sits past the last element
    pub(crate) fn over(chain: &'a mut [Box<dyn Middleware>]) -> Self {
        Self { rest: chain }
    }

    /// Run the remaining interceptors and the core reducer
    pub fn run(&mut self, prev: &ValidatorState, action: &Action) -> ValidatorState {
        match self.rest.split_first_mut() {
            Some((head, tail)) => head.handle(prev, action, &mut Next { rest: tail }),
            None => reduce(prev, action),
        }
    }
}

/// Run one transition through the chain in registration order
pub(crate) fn run_chain(
    chain: &mut [Box<dyn Middleware>],
    prev: &ValidatorState,
    action: &Action,
) -> ValidatorState {
    Next::over(chain).run(prev, action)
}

impl<F> Middleware for F
where
    F: FnMut(&ValidatorState, &Action, &mut Next<'_>) -> ValidatorState,
{
    fn handle(&mut self, prev: &ValidatorState, action: &Action, next: &mut Next<'_>) -> ValidatorState {
        self(prev, action, next)
    }
}
