//! Interactive chatbot: conversation state, prompt rendering and the
//! Ollama-backed conversation loop.

pub mod history;
pub mod ollama;
pub mod prompt;
pub mod repl;

pub use history::ConversationHistory;
pub use ollama::OllamaClient;
pub use repl::run_conversation;
