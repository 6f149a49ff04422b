//! Prompt rendering for the text-generation request.

/// Render the full prompt sent to the model for one turn.
///
/// The template pairs the accumulated conversation history with the new
/// question so the model can answer in context. The history string is
/// embedded verbatim.
pub fn render_prompt(history: &str, question: &str) -> String {
    format!(
        "Answer the question below.\n\
         Here is the conversation history: {history}\n\
         Question: {question}\n\
         Answer:\n"
    )
}
