use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-chat: #f8fffe;
    --color-sidebar-bg: linear-gradient(180deg, #022c22 0%, #064e3b 50%, #065f46 100%);
    --color-sidebar-text: #f0fdfa;
    --color-text-primary: #134e4a;
    --color-text-muted: #4a6764;
    --color-border: #99f6e4;
    --color-accent: #0d9488;
    --color-accent-strong: #0f766e;
    --color-chat-user-bg: #0d9488;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: linear-gradient(135deg, #ffffff 0%, #f0fdfa 100%);
    --color-chat-assistant-text: #134e4a;
    --color-input-bg: #ffffff;
    --color-input-border: #0d9488;
    --color-banner-bg: #fef3c7;
    --color-banner-text: #92400e;
    --color-banner-border: #f59e0b;
    --color-timestamp: #6b8280;
    --color-code-bg: #e0f2f1;
    --color-code-text: #0f766e;
    --color-pre-bg: #0f766e;
    --color-pre-text: #ccfbf1;
    --color-confidence-high: #059669;
    --color-confidence-medium: #d97706;
    --color-confidence-low: #dc2626;
    --color-typing-dot: #14b8a6;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.chat-wrap { background: var(--color-bg-chat); }
.btn:hover { background: rgba(13, 148, 136, 0.08); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0f172a;
    --color-bg-chat: #1e293b;
    --color-sidebar-bg: linear-gradient(180deg, #0f172a 0%, #1e293b 100%);
    --color-sidebar-text: #f0fdfa;
    --color-text-primary: #e2e8f0;
    --color-text-muted: #94a3b8;
    --color-border: #334155;
    --color-accent: #14b8a6;
    --color-accent-strong: #0d9488;
    --color-chat-user-bg: #0d9488;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1e293b;
    --color-chat-assistant-text: #e2e8f0;
    --color-input-bg: #0f172a;
    --color-input-border: #14b8a6;
    --color-banner-bg: #3b2f14;
    --color-banner-text: #fcd34d;
    --color-banner-border: #f59e0b;
    --color-timestamp: #7c8d9b;
    --color-code-bg: #1e293b;
    --color-code-text: #5eead4;
    --color-pre-bg: #0f766e;
    --color-pre-text: #ccfbf1;
    --color-confidence-high: #34d399;
    --color-confidence-medium: #fbbf24;
    --color-confidence-low: #f87171;
    --color-typing-dot: #14b8a6;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.chat-wrap { background: var(--color-bg-chat); }
.btn:hover { background: rgba(20, 184, 166, 0.15); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;
