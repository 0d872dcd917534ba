use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub const RESPONSES_DIR: &str = "cache/responses";

/// Follow-up button labels get cut at this many characters.
const SUGGESTION_LABEL_MAX: usize = 60;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day], [hour padding:zero]:[minute padding:zero]");

/// Render a stored RFC 3339 timestamp for display. Unparseable strings come
/// back verbatim, the only defensive path in the app.
pub fn format_message_timestamp(timestamp: Option<&str>) -> Option<String> {
    let raw = timestamp?;
    let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) else {
        return Some(raw.to_string());
    };
    let localized = match UtcOffset::current_local_offset() {
        Ok(offset) => parsed.to_offset(offset),
        Err(_) => parsed,
    };
    match localized.format(MESSAGE_TIME_FORMAT) {
        Ok(formatted) => Some(formatted),
        Err(_) => Some(raw.to_string()),
    }
}

/// Button label for a follow-up question, ellipsized past 60 characters.
pub fn suggestion_label(question: &str) -> String {
    let mut label: String = question.chars().take(SUGGESTION_LABEL_MAX).collect();
    if question.chars().count() > SUGGESTION_LABEL_MAX {
        label.push('\u{2026}');
    }
    label
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("failed to write response file: {0}")]
    Io(#[from] std::io::Error),
}

/// Hand a reply's raw text to the host filesystem, the download affordance.
/// Files land under `cache/responses/` with a timestamped name.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_response_text(content: &str) -> Result<String, ExportError> {
    if content.trim().is_empty() {
        return Err(ExportError::Empty);
    }
    fs::create_dir_all(RESPONSES_DIR)?;
    let stamp = OffsetDateTime::now_utc().unix_timestamp();
    let path = PathBuf::from(RESPONSES_DIR).join(format!("medibot-response-{stamp}.txt"));
    fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

#[cfg(target_arch = "wasm32")]
pub fn export_response_text(content: &str) -> Result<String, ExportError> {
    if content.trim().is_empty() {
        return Err(ExportError::Empty);
    }
    // Browsers handle saving client-side; nothing to write here.
    Ok(String::from("medibot-response.txt"))
}
