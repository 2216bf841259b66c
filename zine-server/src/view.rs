//! View types for the HTTP surface.
//!
//! This module projects session state into the JSON shapes the front-end
//! renders. The progress fraction mirrors the source experience: it
//! advances past the current question only once its page is revealed.

use serde::Serialize;

use crate::session::{Phase, SessionId, SessionState};
use zine_core::page::Page;
use zine_core::questions::QUESTION_COUNT;

/// Snapshot of one session for display.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub phase: String,
    pub total_questions: usize,
    /// Fraction of the sequence completed, in `[0, 1]`.
    pub progress: f64,
    /// True while the remote sequence is running and input is rejected.
    pub generating: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Present during reveal: whether this was the final question.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_last: Option<bool>,
    /// The page on display during reveal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
    /// Number of pages produced so far this session.
    pub session_pages: usize,
}

impl SessionView {
    pub fn from_state(id: &SessionId, state: &SessionState) -> Self {
        let index = state.phase.question_index();
        let total = QUESTION_COUNT as f64;

        let progress = match &state.phase {
            Phase::Intro => 0.0,
            Phase::Questioning { index } | Phase::Generating { index, .. } => index.0 as f64 / total,
            Phase::Reveal { index, .. } => (index.0 + 1) as f64 / total,
            Phase::Gallery => 1.0,
        };

        let (is_last, page) = match &state.phase {
            Phase::Reveal { index, page } => (Some(index.is_last()), Some(page.clone())),
            _ => (None, None),
        };

        Self {
            session_id: id.to_string(),
            phase: state.phase.name().to_string(),
            total_questions: QUESTION_COUNT,
            progress,
            generating: state.phase.is_loading(),
            question_number: index.map(|i| i.number()),
            question: index.map(|i| i.question().to_string()),
            is_last,
            page,
            session_pages: state.pages.len(),
        }
    }
}

/// The gallery: pages in reading order.
#[derive(Debug, Serialize)]
pub struct GalleryView {
    pub total: usize,
    pub pages: Vec<Page>,
}

impl GalleryView {
    /// Build the gallery from a page list, sorted ascending by page number.
    pub fn from_pages(mut pages: Vec<Page>) -> Self {
        pages.sort_by_key(|p| p.page_number);
        Self {
            total: pages.len(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::QuestionIndex;
    use zine_core::page::{PageDraft, PageId};

    fn page(n: u32) -> Page {
        PageDraft {
            question: format!("q{}", n),
            answer: format!("a{}", n),
            musing: format!("m{}", n),
            image_url: format!("https://img.example/{}.png", n),
            page_number: n,
        }
        .into_page(PageId::from(format!("pg_{}", n)))
    }

    #[test]
    fn test_intro_view() {
        let id = SessionId::new();
        let view = SessionView::from_state(&id, &SessionState::intro());
        assert_eq!(view.phase, "intro");
        assert_eq!(view.progress, 0.0);
        assert_eq!(view.question, None);
        assert!(!view.generating);
    }

    #[test]
    fn test_questioning_view_exposes_question() {
        let id = SessionId::new();
        let state = SessionState {
            phase: Phase::Questioning {
                index: QuestionIndex(2),
            },
            pages: vec![page(1), page(2)],
        };
        let view = SessionView::from_state(&id, &state);
        assert_eq!(view.phase, "questioning");
        assert_eq!(view.question_number, Some(3));
        assert_eq!(view.question.as_deref(), Some(QuestionIndex(2).question()));
        assert_eq!(view.progress, 2.0 / 5.0);
        assert_eq!(view.session_pages, 2);
    }

    #[test]
    fn test_reveal_view_advances_progress_and_flags_last() {
        let id = SessionId::new();
        let state = SessionState {
            phase: Phase::Reveal {
                index: QuestionIndex(4),
                page: page(5),
            },
            pages: vec![],
        };
        let view = SessionView::from_state(&id, &state);
        assert_eq!(view.phase, "reveal");
        assert_eq!(view.progress, 1.0);
        assert_eq!(view.is_last, Some(true));
        assert_eq!(view.page.as_ref().map(|p| p.page_number), Some(5));
    }

    #[test]
    fn test_generating_view_reports_loading() {
        let id = SessionId::new();
        let state = SessionState {
            phase: Phase::Generating {
                index: QuestionIndex(1),
                answer: "a".to_string(),
                musing: None,
            },
            pages: vec![],
        };
        let view = SessionView::from_state(&id, &state);
        assert!(view.generating);
        assert_eq!(view.progress, 1.0 / 5.0);
    }

    #[test]
    fn test_gallery_sorts_pages_ascending() {
        let gallery = GalleryView::from_pages(vec![page(3), page(1), page(2)]);
        let numbers: Vec<u32> = gallery.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(gallery.total, 3);
    }
}
