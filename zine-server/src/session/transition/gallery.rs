//! Gallery phase transitions.

use super::{ignore_stale, restart, unhandled, TransitionResult};
use crate::session::event::Event;
use crate::session::state::SessionState;

/// Handle transitions from the Gallery phase.
///
/// The zine is finished; the only way forward is to start over.
pub fn handle(state: SessionState, event: Event) -> TransitionResult {
    match event {
        Event::RestartRequested => restart(),

        event @ (Event::MusingGenerated { .. }
        | Event::ImageGenerated { .. }
        | Event::PageCreated { .. }) => ignore_stale(state, &event),

        event => unhandled(state, &event),
    }
}
