//! Reply generation seam.
//!
//! The store and UI only see the [`ReplyGenerator`] trait, so a real
//! retrieval-backed answerer can be dropped in without touching the
//! conversation state machine. The shipped implementation returns a canned
//! demo answer.

use std::time::Duration;

use crate::types::Confidence;

/// Default pause before a reply is appended, matching the typing-indicator
/// window the UI shows while processing.
pub const REPLY_DELAY: Duration = Duration::from_millis(1200);

/// The structured answer a generator produces for one user question.
#[derive(Clone, Debug, PartialEq)]
pub struct BotReply {
    pub content: String,
    pub sources: Vec<String>,
    pub confidence: Option<Confidence>,
    pub suggested_questions: Vec<String>,
}

pub trait ReplyGenerator: Send + Sync {
    fn reply(&self, question: &str) -> BotReply;
}

/// Demo generator: ignores the question text and returns a fixed answer with
/// stub sources and medium confidence.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderReplyGenerator;

impl ReplyGenerator for PlaceholderReplyGenerator {
    fn reply(&self, _question: &str) -> BotReply {
        BotReply {
            content: "Thanks for your question. This is a **demo response**. \
                      In production I would answer from the indexed medical content.\n\n\
                      Example formatting:\n- **Bold** and _italic_\n- Lists and structured answers\n\
                      Always consult a healthcare provider for personal advice."
                .to_string(),
            sources: vec![
                "Knowledge base (demo)".to_string(),
                "General medical literature".to_string(),
            ],
            confidence: Some(Confidence::Medium),
            suggested_questions: vec![
                "What are the main types of diabetes?".to_string(),
                "How is blood sugar managed?".to_string(),
            ],
        }
    }
}

/// Reply delay, overridable with `MEDIBOT_REPLY_DELAY_MS` (loaded from the
/// environment or a `.env` file at startup).
pub fn reply_delay() -> Duration {
    std::env::var("MEDIBOT_REPLY_DELAY_MS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(REPLY_DELAY)
}
