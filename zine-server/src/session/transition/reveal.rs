//! Reveal phase transitions.

use super::{ignore_stale, restart, unhandled, TransitionResult};
use crate::session::event::Event;
use crate::session::state::{Phase, SessionState};

/// Handle transitions from the Reveal phase.
///
/// The freshly created page is on display. Continuing moves to the next
/// question, or to the gallery after the final one.
pub fn handle(state: SessionState, event: Event) -> TransitionResult {
    let Phase::Reveal { index, .. } = state.phase else {
        return unhandled(state, &event);
    };

    match event {
        Event::ContinueRequested => {
            let phase = match index.next() {
                Some(next) => Phase::Questioning { index: next },
                None => Phase::Gallery,
            };
            TransitionResult::new(
                SessionState {
                    phase,
                    pages: state.pages,
                },
                vec![],
            )
        }

        Event::RestartRequested => restart(),

        event @ (Event::MusingGenerated { .. }
        | Event::ImageGenerated { .. }
        | Event::PageCreated { .. }) => ignore_stale(state, &event),

        event => unhandled(state, &event),
    }
}
