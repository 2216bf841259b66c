//! Questioning phase transitions.

use super::{ignore_stale, restart, unhandled, TransitionResult};
use crate::session::effect::{Effect, LogLevel};
use crate::session::event::Event;
use crate::session::state::{Phase, SessionState};

/// Handle transitions from the Questioning phase.
///
/// The session is waiting for an answer to the question at the current
/// index. A non-blank answer starts the remote sequence; a blank one is a
/// no-op.
pub fn handle(state: SessionState, event: Event) -> TransitionResult {
    let Phase::Questioning { index } = state.phase else {
        return unhandled(state, &event);
    };

    match event {
        Event::AnswerSubmitted { answer } => {
            if answer.trim().is_empty() {
                return TransitionResult::new(
                    state,
                    vec![Effect::Log {
                        level: LogLevel::Info,
                        message: format!("Ignoring blank answer for question {}", index),
                    }],
                );
            }

            TransitionResult::new(
                SessionState {
                    phase: Phase::Generating {
                        index,
                        answer: answer.clone(),
                        musing: None,
                    },
                    pages: state.pages,
                },
                vec![Effect::GenerateMusing {
                    question: index.question().to_string(),
                    answer,
                }],
            )
        }

        Event::RestartRequested => restart(),

        event @ (Event::MusingGenerated { .. }
        | Event::ImageGenerated { .. }
        | Event::PageCreated { .. }) => ignore_stale(state, &event),

        event => unhandled(state, &event),
    }
}
