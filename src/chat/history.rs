//! Append-only conversation history.

/// Growing text record of a chatbot conversation.
///
/// Each completed turn appends one question/answer pair with fixed role
/// labels. Entries are never edited or removed, and nothing is persisted
/// across runs. The whole buffer is passed back into each new request so
/// the model sees the full conversation so far.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    buffer: String,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed exchange, question first.
    pub fn record_turn(&mut self, question: &str, answer: &str) {
        self.buffer
            .push_str(&format!("\nUser: {question}\nChatbot: {answer}\n"));
    }

    /// The accumulated context for the next request. Empty before the
    /// first turn.
    pub fn as_context(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
