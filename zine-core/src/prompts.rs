//! Prompt construction for the two generation calls.
//!
//! Both prompts are keyed on the user's answer; the musing prompt also
//! carries the question that provoked it. The generated musing must never
//! echo the answer back, so the instruction text lives in a separate asset
//! and is prepended verbatim.

/// Instruction preamble for the musing generator.
pub fn musing_instruction() -> String {
    include_str!("../prompt.txt").to_string()
}

/// Build the full musing prompt from a (question, answer) pair.
pub fn create_musing_prompt(question: &str, answer: &str) -> String {
    let mut prompt = musing_instruction();

    prompt.push('\n');
    prompt.push_str(&format!("Question: \"{}\"\n", question));
    prompt.push_str(&format!("Answer: \"{}\"\n", answer));
    prompt.push_str("\nWrite the musing:");

    prompt
}

/// Build the artwork prompt from an answer.
///
/// The art direction is fixed; only the confession varies.
pub fn create_image_prompt(answer: &str) -> String {
    format!(
        "Abstract surrealist art, dark moody atmosphere, inspired by this introspective confession: \"{}\". \
         Style: black and white illustration, textured, dreamlike, unsettling beauty, fine art quality, \
         dramatic lighting, shadows",
        answer
    )
}
