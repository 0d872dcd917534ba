//! MediBot: a single-page chat interface for a placeholder medical Q&A
//! assistant. One in-memory conversation per session, a dark-mode toggle,
//! and a canned reply appended after a short delay.

pub mod conversation;
pub mod reply;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
