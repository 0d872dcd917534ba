use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Informational input cap, surfaced as a composer hint. Never enforced.
pub const MAX_INPUT_CHARS: usize = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[default]
    Assistant,
}

/// Coarse reliability indicator attached to assistant replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// CSS class for the badge. Anything that is not high or medium renders
    /// with the low styling.
    pub fn display_class(self) -> &'static str {
        match self {
            Confidence::High => "confidence-high",
            Confidence::Medium => "confidence-medium",
            Confidence::Low => "confidence-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

/// One turn in the conversation. Records arriving without a role decode as
/// assistant, without content as empty text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: String,
    /// RFC 3339 instant captured at creation, never mutated afterwards.
    /// Stored raw so display formatting can fall back to it verbatim.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub suggested_questions: Vec<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::User,
            content: content.into(),
            timestamp: Some(now_timestamp()),
            ..ChatMessage::default()
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Some(now_timestamp()),
            ..ChatMessage::default()
        }
    }
}

/// Current instant as an RFC 3339 string.
pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
}
