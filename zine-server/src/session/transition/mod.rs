//! Pure state transition function.
//!
//! The transition function is the core of the session flow. It takes the
//! current state and an event, and returns the new state and a list of
//! effects. This function has NO side effects - it is pure and
//! deterministic.
//!
//! Each phase has its own handler module with co-located tests:
//! - `intro`: landing stage
//! - `questioning`: waiting for an answer
//! - `generating`: the remote sequence is in flight
//! - `reveal`: showing the created page
//! - `gallery`: browsing the finished zine

mod gallery;
mod generating;
mod intro;
mod questioning;
mod reveal;

use super::effect::{Effect, LogLevel};
use super::event::Event;
use super::state::{Phase, SessionState};

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub state: SessionState,
    /// Effects to execute.
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    pub fn no_change(state: SessionState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }
}

/// A restart resets everything: back to the intro, index forgotten,
/// session pages cleared. Valid from every phase.
pub(crate) fn restart() -> TransitionResult {
    TransitionResult::no_change(SessionState::intro())
}

/// Ignore a completion event that arrived for a phase that no longer
/// expects it (e.g. a restart happened while the remote sequence was in
/// flight).
pub(crate) fn ignore_stale(state: SessionState, event: &Event) -> TransitionResult {
    let message = format!(
        "Ignoring stale {} event in {} phase",
        event.name(),
        state.phase.name()
    );
    TransitionResult::new(
        state,
        vec![Effect::Log {
            level: LogLevel::Info,
            message,
        }],
    )
}

/// Log and drop an event the current phase has no handling for.
pub(crate) fn unhandled(state: SessionState, event: &Event) -> TransitionResult {
    let message = format!(
        "Unhandled event {} in {} phase",
        event.log_summary(),
        state.phase.name()
    );
    TransitionResult::new(
        state,
        vec![Effect::Log {
            level: LogLevel::Warn,
            message,
        }],
    )
}

/// Pure state transition function.
///
/// Given the current state and an event, returns the new state and effects
/// to execute. This function has NO side effects - all effects are returned
/// as data.
pub fn transition(state: SessionState, event: Event) -> TransitionResult {
    match &state.phase {
        Phase::Intro => intro::handle(state, event),
        Phase::Questioning { .. } => questioning::handle(state, event),
        Phase::Generating { .. } => generating::handle(state, event),
        Phase::Reveal { .. } => reveal::handle(state, event),
        Phase::Gallery => gallery::handle(state, event),
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::QuestionIndex;
    use super::*;
    use proptest::prelude::*;
    use zine_core::page::{PageDraft, PageId};
    use zine_core::questions::{QUESTIONS, QUESTION_COUNT};

    /// Drive one full question through the remote sequence, simulating the
    /// backend: answer -> musing -> image -> created page.
    fn answer_question(state: SessionState, answer: &str, id: &str) -> SessionState {
        let index = state
            .phase
            .question_index()
            .expect("answer_question called outside questioning");

        let result = transition(
            state,
            Event::AnswerSubmitted {
                answer: answer.to_string(),
            },
        );
        assert!(
            matches!(result.state.phase, Phase::Generating { .. }),
            "expected generating, got {:?}",
            result.state.phase
        );
        assert_eq!(result.effects.len(), 1);
        let Effect::GenerateMusing { question, .. } = &result.effects[0] else {
            panic!("expected GenerateMusing, got {:?}", result.effects[0]);
        };
        assert_eq!(question, index.question());

        let result = transition(
            result.state,
            Event::MusingGenerated {
                musing: format!("musing on {}", answer),
            },
        );
        let Effect::GenerateImage {
            answer: image_answer,
        } = &result.effects[0]
        else {
            panic!("expected GenerateImage, got {:?}", result.effects[0]);
        };
        assert_eq!(image_answer, answer);

        let result = transition(
            result.state,
            Event::ImageGenerated {
                image_url: format!("https://img.example/{}.png", id),
            },
        );
        let Effect::CreatePage { draft } = &result.effects[0] else {
            panic!("expected CreatePage, got {:?}", result.effects[0]);
        };
        assert_eq!(draft.page_number, index.page_number());
        assert_eq!(draft.question, index.question());
        assert_eq!(draft.answer, answer);

        let page = draft.clone().into_page(PageId::from(id));
        let result = transition(result.state, Event::PageCreated { page });
        assert!(
            matches!(result.state.phase, Phase::Reveal { .. }),
            "expected reveal, got {:?}",
            result.state.phase
        );
        result.state
    }

    #[test]
    fn test_full_session_scenario() {
        // start -> answer Q1 -> reveal -> continue -> ... -> gallery with 5 pages
        let mut state = transition(SessionState::intro(), Event::StartRequested).state;
        assert_eq!(
            state.phase,
            Phase::Questioning {
                index: QuestionIndex::FIRST
            }
        );

        for (i, _) in QUESTIONS.iter().enumerate() {
            state = answer_question(state, &format!("answer {}", i + 1), &format!("pg_{}", i + 1));

            let Phase::Reveal { index, ref page } = state.phase else {
                panic!("expected reveal, got {:?}", state.phase);
            };
            assert_eq!(page.page_number, i as u32 + 1);
            assert_eq!(index.is_last(), i + 1 == QUESTION_COUNT);

            state = transition(state, Event::ContinueRequested).state;
            if i + 1 < QUESTION_COUNT {
                assert_eq!(
                    state.phase,
                    Phase::Questioning {
                        index: QuestionIndex(i + 1)
                    },
                    "after question {} continue should show the next question",
                    i + 1
                );
            }
        }

        assert_eq!(state.phase, Phase::Gallery);
        assert_eq!(state.pages.len(), QUESTION_COUNT);
        for (i, page) in state.pages.iter().enumerate() {
            assert_eq!(page.page_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_page_number_matches_question_position_for_all_questions() {
        let mut state = transition(SessionState::intro(), Event::StartRequested).state;
        for i in 0..QUESTION_COUNT {
            state = answer_question(state, "something true", &format!("pg_{}", i));
            let Phase::Reveal { ref page, .. } = state.phase else {
                panic!("expected reveal");
            };
            assert_eq!(page.page_number as usize, i + 1);
            state = transition(state, Event::ContinueRequested).state;
        }
    }

    #[test]
    fn test_restart_from_every_phase() {
        let generating = SessionState {
            phase: Phase::Generating {
                index: QuestionIndex(2),
                answer: "a".to_string(),
                musing: Some("m".to_string()),
            },
            pages: vec![sample_page(1)],
        };
        let reveal = SessionState {
            phase: Phase::Reveal {
                index: QuestionIndex(2),
                page: sample_page(3),
            },
            pages: vec![sample_page(1), sample_page(2), sample_page(3)],
        };
        let questioning = SessionState {
            phase: Phase::Questioning {
                index: QuestionIndex(4),
            },
            pages: vec![sample_page(1)],
        };
        let gallery = SessionState {
            phase: Phase::Gallery,
            pages: vec![sample_page(1)],
        };

        for state in [
            SessionState::intro(),
            questioning,
            generating,
            reveal,
            gallery,
        ] {
            let result = transition(state, Event::RestartRequested);
            assert_eq!(result.state.phase, Phase::Intro);
            assert!(result.state.pages.is_empty());
        }
    }

    #[test]
    fn test_stale_completion_events_are_ignored() {
        let state = SessionState {
            phase: Phase::Questioning {
                index: QuestionIndex::FIRST,
            },
            pages: vec![],
        };

        for event in [
            Event::MusingGenerated {
                musing: "m".to_string(),
            },
            Event::ImageGenerated {
                image_url: "u".to_string(),
            },
            Event::PageCreated {
                page: sample_page(1),
            },
        ] {
            let result = transition(state.clone(), event);
            assert_eq!(result.state, state);
            assert!(matches!(
                &result.effects[0],
                Effect::Log {
                    level: LogLevel::Info,
                    ..
                }
            ));
        }
    }

    fn sample_page(n: u32) -> zine_core::page::Page {
        PageDraft {
            question: format!("q{}", n),
            answer: format!("a{}", n),
            musing: format!("m{}", n),
            image_url: format!("https://img.example/{}.png", n),
            page_number: n,
        }
        .into_page(PageId::from(format!("pg_{}", n)))
    }

    // =========================================================================
    // Property-based tests
    // =========================================================================

    /// Generate an arbitrary user-action event (no remote completions).
    fn arb_user_event() -> impl Strategy<Value = Event> {
        prop_oneof![
            Just(Event::StartRequested),
            any::<String>().prop_map(|answer| Event::AnswerSubmitted { answer }),
            Just(Event::ContinueRequested),
            Just(Event::RestartRequested),
        ]
    }

    proptest! {
        /// Property: the transition function is total over user actions and
        /// pages only ever appear via PageCreated. Since no completion
        /// events are fed here, the session can never accumulate a page.
        #[test]
        fn user_actions_never_create_pages(events in proptest::collection::vec(arb_user_event(), 0..40)) {
            let mut state = SessionState::intro();
            for event in events {
                state = transition(state, event).state;
                prop_assert!(state.pages.is_empty());
                if let Some(index) = state.phase.question_index() {
                    prop_assert!(index.0 < QUESTION_COUNT);
                }
            }
        }

        /// Property: once generating, no user action except restart leaves
        /// the phase. The loading state has no user-visible exit - only
        /// remote completions (or a restart) move it.
        #[test]
        fn generating_only_exits_via_restart(events in proptest::collection::vec(arb_user_event(), 1..30)) {
            let mut state = SessionState {
                phase: Phase::Generating {
                    index: QuestionIndex::FIRST,
                    answer: "answer".to_string(),
                    musing: None,
                },
                pages: vec![],
            };
            for event in events {
                let was_restart = matches!(event, Event::RestartRequested);
                state = transition(state, event).state;
                if was_restart {
                    prop_assert_eq!(&state.phase, &Phase::Intro);
                    break;
                }
                let still_generating = matches!(state.phase, Phase::Generating { .. });
                prop_assert!(still_generating);
            }
        }
    }
}
