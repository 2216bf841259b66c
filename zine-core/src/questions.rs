//! The fixed question sequence.
//!
//! Every session walks the same five questions in the same order. The
//! question list is data, not configuration: page numbering, progress and
//! the questioning/gallery transition all derive from its length.

/// The five questions, in presentation order.
pub const QUESTIONS: [&str; 5] = [
    "What is something you pretend not to remember, but think about often?",
    "If your conscience had a face, what expression would it wear when looking at you?",
    "What is the kindest lie you've ever told yourself to survive?",
    "Describe a version of yourself that only exists when no one is watching.",
    "What do you fear will be true about you, long after you're gone?",
];

/// Number of questions in a full session.
pub const QUESTION_COUNT: usize = QUESTIONS.len();

/// Returns the question at the given 0-based index, if it exists.
pub fn question(index: usize) -> Option<&'static str> {
    QUESTIONS.get(index).copied()
}
