//! Conversation store: the ordered message list plus the two session flags.
//!
//! Messages are append-only except for two mutations, `clear` and
//! `regenerate`. The reply step is guarded by [`Conversation::reply_due`]:
//! it only fires while processing with a trailing user message, so a reply
//! can never be appended twice for the same question.

use crate::reply::BotReply;
use crate::types::{ChatMessage, Role, now_timestamp};

const GREETING: &str = "\u{1f44b} **Hello!** I'm **MediBot**, your medical Q&A assistant.\n\n\
                        Ask me questions and I'll answer using my **knowledge base** — try symptoms, \
                        conditions, treatments, or definitions.\n\n\
                        _Information only; always consult a healthcare professional for medical advice._";

const CLEARED: &str = "Chat cleared. Ask me a medical question.";

/// Example prompts offered on the opening greeting and in the sidebar.
pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "What is diabetes?",
    "What are symptoms of anemia?",
    "How is hypertension treated?",
];

/// Where the reply loop stands: `AwaitingReply` covers the window between a
/// user submission and the assistant reply being appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyState {
    Idle,
    AwaitingReply,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    pub dark_mode: bool,
    pub is_processing: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        let mut greeting = ChatMessage::assistant(GREETING);
        greeting.suggested_questions = EXAMPLE_QUESTIONS
            .iter()
            .map(|q| q.to_string())
            .collect();
        Conversation {
            messages: vec![greeting],
            dark_mode: false,
            is_processing: false,
        }
    }

    /// Push a message onto the end of the sequence. No validation.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Append the trimmed text as a user message and mark a reply pending.
    /// Empty input and input arriving while a reply is pending are ignored.
    /// Suggested-question taps route through here as well.
    pub fn submit(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_processing {
            return;
        }
        self.messages.push(ChatMessage::user(trimmed));
        self.is_processing = true;
    }

    /// Reset to a single fresh assistant greeting and stop any pending reply.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::assistant(CLEARED)];
        self.is_processing = false;
    }

    /// Drop the most recent assistant reply and mark a fresh one pending.
    /// With fewer than two entries there is nothing to regenerate and the
    /// sequence is left untouched.
    pub fn regenerate(&mut self) {
        if self.messages.len() < 2 {
            return;
        }
        self.messages.pop();
        self.is_processing = true;
    }

    /// The reply step only runs while processing with a trailing user
    /// message.
    pub fn reply_due(&self) -> bool {
        self.is_processing
            && self
                .messages
                .last()
                .is_some_and(|m| m.role == Role::User)
    }

    /// Content of the trailing user message, if the reply guard holds.
    pub fn pending_question(&self) -> Option<&str> {
        if !self.reply_due() {
            return None;
        }
        self.messages.last().map(|m| m.content.as_str())
    }

    /// Append the generated answer and leave the awaiting-reply window.
    pub fn apply_reply(&mut self, reply: BotReply) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: reply.content,
            timestamp: Some(now_timestamp()),
            sources: reply.sources,
            confidence: reply.confidence,
            suggested_questions: reply.suggested_questions,
        });
        self.is_processing = false;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn state(&self) -> ReplyState {
        if self.is_processing {
            ReplyState::AwaitingReply
        } else {
            ReplyState::Idle
        }
    }

    /// Index of the message whose bubble shows the Regenerate control: the
    /// last message, only when it is an assistant reply and no reply is
    /// pending.
    pub fn regenerable_index(&self) -> Option<usize> {
        if self.is_processing {
            return None;
        }
        match self.messages.last() {
            Some(last) if last.role == Role::Assistant => Some(self.messages.len() - 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::{PlaceholderReplyGenerator, ReplyGenerator};

    #[test]
    fn new_conversation_opens_with_greeting() {
        let convo = Conversation::new();
        assert_eq!(convo.messages.len(), 1);
        assert_eq!(convo.messages[0].role, Role::Assistant);
        assert_eq!(convo.messages[0].suggested_questions.len(), 3);
        assert!(!convo.is_processing);
        assert!(!convo.dark_mode);
    }

    #[test]
    fn submit_appends_user_message_and_sets_processing() {
        let mut convo = Conversation::new();
        convo.submit("  What is diabetes?  ");
        assert_eq!(convo.messages.len(), 2);
        let last = convo.messages.last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "What is diabetes?");
        assert!(last.timestamp.is_some());
        assert_eq!(convo.state(), ReplyState::AwaitingReply);
    }

    #[test]
    fn submit_ignores_empty_and_whitespace_input() {
        let mut convo = Conversation::new();
        convo.submit("");
        convo.submit("   \n  ");
        assert_eq!(convo.messages.len(), 1);
        assert!(!convo.is_processing);
    }

    #[test]
    fn submit_ignores_input_while_awaiting_reply() {
        let mut convo = Conversation::new();
        convo.submit("first");
        convo.submit("second");
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(convo.messages.last().unwrap().content, "first");
    }

    #[test]
    fn clear_resets_to_single_assistant_greeting() {
        let mut convo = Conversation::new();
        convo.submit("question");
        convo.clear();
        assert_eq!(convo.messages.len(), 1);
        assert_eq!(convo.messages[0].role, Role::Assistant);
        assert!(!convo.is_processing);
        assert_eq!(convo.state(), ReplyState::Idle);
    }

    #[test]
    fn reply_guard_only_holds_for_trailing_user_message() {
        let mut convo = Conversation::new();
        assert!(!convo.reply_due());

        convo.submit("What is diabetes?");
        assert!(convo.reply_due());

        let reply = PlaceholderReplyGenerator.reply("What is diabetes?");
        convo.apply_reply(reply);
        assert!(!convo.reply_due());

        // Processing without a trailing user message must not fire.
        convo.is_processing = true;
        assert!(!convo.reply_due());
        assert!(convo.pending_question().is_none());
    }

    #[test]
    fn apply_reply_carries_sources_confidence_and_followups() {
        let mut convo = Conversation::new();
        convo.submit("What is diabetes?");
        let question = convo.pending_question().unwrap().to_string();
        convo.apply_reply(PlaceholderReplyGenerator.reply(&question));

        assert_eq!(convo.messages.len(), 3);
        let last = convo.messages.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(last.content.contains("demo response"));
        assert_eq!(last.confidence, Some(crate::types::Confidence::Medium));
        assert_eq!(
            last.sources,
            vec![
                "Knowledge base (demo)".to_string(),
                "General medical literature".to_string()
            ]
        );
        assert_eq!(last.suggested_questions.len(), 2);
        assert!(!convo.is_processing);
    }

    #[test]
    fn regenerate_pops_last_reply_and_reenters_processing() {
        let mut convo = Conversation::new();
        convo.submit("What is diabetes?");
        convo.apply_reply(PlaceholderReplyGenerator.reply("What is diabetes?"));
        assert_eq!(convo.messages.len(), 3);

        convo.regenerate();
        assert_eq!(convo.messages.len(), 2);
        assert_eq!(convo.messages.last().unwrap().role, Role::User);
        assert!(convo.is_processing);
        assert!(convo.reply_due());
    }

    #[test]
    fn regenerate_on_short_sequence_leaves_messages_untouched() {
        let mut convo = Conversation::new();
        convo.regenerate();
        assert_eq!(convo.messages.len(), 1);
    }

    #[test]
    fn regenerate_control_gated_to_last_assistant_message() {
        let mut convo = Conversation::new();
        assert_eq!(convo.regenerable_index(), Some(0));

        convo.submit("question");
        // Trailing message is the user's and a reply is pending.
        assert_eq!(convo.regenerable_index(), None);

        convo.apply_reply(PlaceholderReplyGenerator.reply("question"));
        assert_eq!(convo.regenerable_index(), Some(2));
    }
}
