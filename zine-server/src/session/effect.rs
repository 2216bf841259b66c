//! Effects (side effects as data).
//!
//! Effects describe what should happen as a result of a state transition.
//! They are pure data - the interpreter executes them against the real
//! services. This separation enables testing the transition logic without
//! mocking HTTP.

use serde::{Deserialize, Serialize};
use zine_core::page::PageDraft;

/// All effects that can be produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Ask the language-generation endpoint for a musing on the
    /// (question, answer) pair.
    GenerateMusing { question: String, answer: String },

    /// Ask the image-generation endpoint for artwork keyed off the answer.
    GenerateImage { answer: String },

    /// Persist the composed page through the backend.
    CreatePage { draft: PageDraft },

    /// Log a message (for debugging/tracing).
    Log { level: LogLevel, message: String },
}

/// Log level for logging effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}
