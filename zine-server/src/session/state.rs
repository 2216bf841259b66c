//! State types for the session flow machine.
//!
//! Following the principle of "make illegal states unrepresentable", the
//! phase is an enum that captures exactly what each stage of the flow
//! needs: the questioning index, the in-flight answer while generating,
//! the revealed page.

use std::fmt;

use zine_core::page::Page;
use zine_core::questions::{self, QUESTION_COUNT};

/// Newtype for a 0-based position in the fixed question sequence.
///
/// Values are only produced by [`QuestionIndex::FIRST`] and
/// [`QuestionIndex::next`], so an index in a live session is always in
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionIndex(pub usize);

impl QuestionIndex {
    /// The first question.
    pub const FIRST: QuestionIndex = QuestionIndex(0);

    /// The question text at this index.
    pub fn question(&self) -> &'static str {
        questions::question(self.0).unwrap_or_default()
    }

    /// 1-based position for display ("Question 3").
    pub fn number(&self) -> usize {
        self.0 + 1
    }

    /// The page number a page created at this index carries.
    /// Always the 1-based question position.
    pub fn page_number(&self) -> u32 {
        self.0 as u32 + 1
    }

    /// True if this is the final question of the sequence.
    pub fn is_last(&self) -> bool {
        self.0 + 1 == QUESTION_COUNT
    }

    /// The next index, or `None` after the final question.
    pub fn next(&self) -> Option<QuestionIndex> {
        if self.is_last() {
            None
        } else {
            Some(QuestionIndex(self.0 + 1))
        }
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One discrete stage of the session flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Landing stage; nothing has been asked yet.
    Intro,

    /// Waiting for the user's answer to the question at `index`.
    Questioning { index: QuestionIndex },

    /// Loading stage: the answer was accepted and the remote sequence
    /// (musing, then image, then persistence) is running. Input is
    /// rejected for the duration. `musing` is filled once the first call
    /// completes.
    Generating {
        index: QuestionIndex,
        answer: String,
        musing: Option<String>,
    },

    /// Showing the freshly created page before moving on.
    Reveal { index: QuestionIndex, page: Page },

    /// All questions answered; browsing the assembled zine.
    Gallery,
}

impl Phase {
    /// Short name for logging and the session view.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Questioning { .. } => "questioning",
            Self::Generating { .. } => "generating",
            Self::Reveal { .. } => "reveal",
            Self::Gallery => "gallery",
        }
    }

    /// The question index, for phases that have one.
    pub fn question_index(&self) -> Option<QuestionIndex> {
        match self {
            Self::Intro | Self::Gallery => None,
            Self::Questioning { index } => Some(*index),
            Self::Generating { index, .. } => Some(*index),
            Self::Reveal { index, .. } => Some(*index),
        }
    }

    /// True while the remote sequence is in flight and input is rejected.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Generating { .. })
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Intro
    }
}

/// Full state of one session: the current phase plus the pages produced
/// so far this session.
///
/// The page list is the one piece of state every phase shares, so it
/// lives alongside the phase rather than in each variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub phase: Phase,
    pub pages: Vec<Page>,
}

impl SessionState {
    /// A fresh session at the intro stage with no pages.
    pub fn intro() -> Self {
        Self::default()
    }
}
