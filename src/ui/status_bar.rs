use crate::app::state::AppState;
use crate::ui::theme::Theme;
use crate::view::ViewTree;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = "Tab/←→ switch  ↑↓ focus  Enter press  q quit";

pub fn render(frame: &mut Frame, area: Rect, tree: &ViewTree, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(" AppletKit ", Theme::status_bar()));

    // Status text, or key hints when idle
    match &state.status_message {
        Some(msg) => parts.push(Span::styled(format!(" {} ", msg.text), Theme::status_hint())),
        None => parts.push(Span::styled(format!(" {} ", KEY_HINTS), Theme::status_bar())),
    }

    // Tab position indicator
    let position = tree
        .tab_strip()
        .map(|strip| format!(" [{}/{}] ", strip.selected + 1, strip.items.len()))
        .unwrap_or_default();

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + position.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(position, Theme::status_bar()));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}
