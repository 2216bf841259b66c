//! Generating phase transitions.
//!
//! The remote sequence runs while the session sits here: musing first,
//! then artwork, then persistence. Only completion events (or a restart)
//! move the phase; user input is rejected for the duration. A failed
//! remote call produces no event at all, so the session stays in this
//! phase indefinitely - there is deliberately no recovery path.

use super::{ignore_stale, restart, unhandled, TransitionResult};
use crate::session::effect::{Effect, LogLevel};
use crate::session::event::Event;
use crate::session::state::{Phase, SessionState};
use zine_core::page::PageDraft;

/// Handle transitions from the Generating phase.
pub fn handle(state: SessionState, event: Event) -> TransitionResult {
    let Phase::Generating {
        index,
        ref answer,
        ref musing,
    } = state.phase
    else {
        return unhandled(state, &event);
    };
    let answer = answer.clone();
    let musing = musing.clone();

    match event {
        // First completion: record the musing and ask for the artwork,
        // keyed off the same answer.
        Event::MusingGenerated { musing: generated } if musing.is_none() => TransitionResult::new(
            SessionState {
                phase: Phase::Generating {
                    index,
                    answer: answer.clone(),
                    musing: Some(generated),
                },
                pages: state.pages,
            },
            vec![Effect::GenerateImage { answer }],
        ),

        // Second completion: both texts exist, compose the draft and
        // persist it. The phase does not advance until the backend has
        // assigned an id.
        Event::ImageGenerated { image_url } => match musing {
            Some(musing) => TransitionResult::new(
                state.clone(),
                vec![Effect::CreatePage {
                    draft: PageDraft {
                        question: index.question().to_string(),
                        answer,
                        musing,
                        image_url,
                        page_number: index.page_number(),
                    },
                }],
            ),
            None => TransitionResult::new(
                state.clone(),
                vec![Effect::Log {
                    level: LogLevel::Warn,
                    message: format!(
                        "Image completed before musing for question {}; dropping it",
                        index
                    ),
                }],
            ),
        },

        // Final completion: the page exists, reveal it and append it to
        // the session's list.
        Event::PageCreated { page } if page.page_number == index.page_number() => {
            let mut pages = state.pages;
            pages.push(page.clone());
            TransitionResult::new(
                SessionState {
                    phase: Phase::Reveal { index, page },
                    pages,
                },
                vec![],
            )
        }

        // Input is disabled while the sequence runs.
        Event::AnswerSubmitted { .. } => TransitionResult::new(
            state.clone(),
            vec![Effect::Log {
                level: LogLevel::Info,
                message: format!("Ignoring answer while generating question {}", index),
            }],
        ),

        Event::RestartRequested => restart(),

        // Duplicate musing, or a page for some other question.
        event @ (Event::MusingGenerated { .. } | Event::PageCreated { .. }) => {
            ignore_stale(state, &event)
        }

        event => unhandled(state, &event),
    }
}
