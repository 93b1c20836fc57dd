use crate::view::TextStyle;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn text(style: TextStyle) -> Style {
        match style {
            TextStyle::Title => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            TextStyle::Headline => Style::default().fg(Color::Cyan),
            TextStyle::Body => Style::default().fg(Color::Gray),
        }
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_focused() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn tab() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_hint() -> Style {
        Style::default().fg(Color::Yellow).bg(Color::DarkGray)
    }
}

/// Terminal glyph for a tab icon identifier.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "house" => "⌂",
        "gear" => "⚙",
        "person" => "☺",
        "" => "",
        _ => "•",
    }
}
