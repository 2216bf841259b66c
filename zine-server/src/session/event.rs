//! Events that trigger state transitions.
//!
//! Events represent things that happened - user actions arriving over
//! HTTP, and completions of the remote generation and persistence calls.
//! They are inputs to the pure transition function.

use zine_core::page::Page;

/// All events that can trigger state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // =========================================================================
    // User actions
    // =========================================================================
    /// User chose to begin the question sequence.
    StartRequested,

    /// User submitted an answer to the current question.
    AnswerSubmitted { answer: String },

    /// User chose to move on from the reveal.
    ContinueRequested,

    /// User chose to start the whole experience over.
    RestartRequested,

    // =========================================================================
    // Remote call completions
    // =========================================================================
    /// The language-generation endpoint returned a musing.
    MusingGenerated { musing: String },

    /// The image-generation endpoint returned artwork.
    ImageGenerated { image_url: String },

    /// The persistence backend created the page and assigned its id.
    PageCreated { page: Page },
}

impl Event {
    /// Returns a summary of the event suitable for logging.
    ///
    /// Answers and musings are personal text; log lengths, not content.
    pub fn log_summary(&self) -> String {
        match self {
            Event::StartRequested => "StartRequested".to_string(),
            Event::AnswerSubmitted { answer } => {
                format!("AnswerSubmitted {{ answer_len: {} }}", answer.len())
            }
            Event::ContinueRequested => "ContinueRequested".to_string(),
            Event::RestartRequested => "RestartRequested".to_string(),
            Event::MusingGenerated { musing } => {
                format!("MusingGenerated {{ musing_len: {} }}", musing.len())
            }
            Event::ImageGenerated { image_url } => {
                format!("ImageGenerated {{ url: {} }}", image_url)
            }
            Event::PageCreated { page } => {
                format!(
                    "PageCreated {{ id: {}, page_number: {} }}",
                    page.id, page.page_number
                )
            }
        }
    }

    /// Short name for "ignoring stale event" log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Event::StartRequested => "StartRequested",
            Event::AnswerSubmitted { .. } => "AnswerSubmitted",
            Event::ContinueRequested => "ContinueRequested",
            Event::RestartRequested => "RestartRequested",
            Event::MusingGenerated { .. } => "MusingGenerated",
            Event::ImageGenerated { .. } => "ImageGenerated",
            Event::PageCreated { .. } => "PageCreated",
        }
    }
}
