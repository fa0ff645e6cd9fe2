// File: src/reducer.rs
// Purpose: The pure transition function from (state, action) to next state

use tracing::warn;

use crate::action::Action;
use crate::field::FieldRecord;
use crate::state::ValidatorState;

/// Compute the next state for a dispatched action
///
/// Total: every action yields a well-formed state. Transitions that
/// cannot apply (unregistered update, conflicting re-registration) are
/// ignored and logged at `warn` rather than surfaced as errors; the
/// prior state comes back unchanged in content.
pub fn reduce(prev: &ValidatorState, action: &Action) -> ValidatorState {
    let mut next = prev.clone();
    match action {
        Action::Register {
            name,
            kind,
            required,
        } => match next.fields.get(name) {
            Some(existing) if existing.kind != *kind => {
                warn!(
                    field = %name,
                    registered = ?existing.kind,
                    requested = ?kind,
                    "ignoring re-registration with conflicting field kind"
                );
            }
            // Registration is idempotent per name
            Some(_) => {}
            None => {
                next.fields
                    .insert(name.clone(), FieldRecord::registered(*kind, *required));
            }
        },
        Action::Update {
            name,
            value,
            validity,
            error,
        } => match next.fields.get_mut(name) {
            Some(record) => {
                record.value = value.clone();
                if let Some(v) = validity {
                    record.validity = *v;
                }
                record.error = error.clone().apply(record.error.take());
            }
            None => {
                warn!(field = %name, "ignoring update for unregistered field");
            }
        },
        Action::SetFormError(message) => {
            next.error = message.clone();
        }
        Action::Reset => {
            for record in next.fields.values_mut() {
                record.reset();
            }
            next.error = None;
        }
    }
    next
}
