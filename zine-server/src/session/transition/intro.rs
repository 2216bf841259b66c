//! Intro phase transitions.

use super::{ignore_stale, restart, unhandled, TransitionResult};
use crate::session::event::Event;
use crate::session::state::{Phase, QuestionIndex, SessionState};

/// Handle transitions from the Intro phase.
///
/// The intro is the landing stage. Starting resets the question index and
/// clears any pages left over from a previous run of this session.
pub fn handle(state: SessionState, event: Event) -> TransitionResult {
    match event {
        Event::StartRequested => TransitionResult::new(
            SessionState {
                phase: Phase::Questioning {
                    index: QuestionIndex::FIRST,
                },
                pages: Vec::new(),
            },
            vec![],
        ),

        Event::RestartRequested => restart(),

        // A restart can land the session back here while a previous remote
        // sequence is still producing results.
        event @ (Event::MusingGenerated { .. }
        | Event::ImageGenerated { .. }
        | Event::PageCreated { .. }) => ignore_stale(state, &event),

        event => unhandled(state, &event),
    }
}
