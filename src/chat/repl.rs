//! The interactive conversation loop.

use crate::chat::history::ConversationHistory;
use crate::chat::prompt::render_prompt;
use crate::domain::traits::TextGeneration;
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

const EXIT_SENTINEL: &str = "exit";

/// Run the chatbot session until the exit sentinel or end of input.
///
/// Reads one line per turn, forwards it to the generator together with the
/// accumulated history, prints the answer and records the turn. The
/// sentinel (case-insensitive) and EOF both end the session cleanly with
/// no model call for that turn. A generator failure is fatal and ends the
/// whole session.
pub fn run_conversation<R, W>(input: R, mut output: W, generator: &dyn TextGeneration) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut history = ConversationHistory::new();

    writeln!(output, "Hi, I'm a chatbot. How can I help you today?")?;
    writeln!(output, "Enter 'exit' to end the conversation.")?;

    let mut lines = input.lines();

    loop {
        write!(output, "You: ")?;
        output.flush()?;

        // lines() strips the terminator only, so the sentinel check sees
        // the input exactly as typed
        let question = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
        };

        if question.eq_ignore_ascii_case(EXIT_SENTINEL) {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        }

        let prompt = render_prompt(history.as_context(), &question);
        debug!("Submitting turn to {} ({} bytes)", generator.model_name(), prompt.len());
        let answer = generator.generate(&prompt)?;

        writeln!(output, "Chatbot: {answer}")?;
        history.record_turn(&question, &answer);
    }
}
