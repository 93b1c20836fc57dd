use crate::ui::layout::split_stack;
use crate::ui::theme::{icon_glyph, Theme};
use crate::view::{TabStrip, TextStyle, ViewNode};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

/// Button focus bookkeeping while walking the tree.
struct Focus {
    focused: Option<usize>,
    next: usize,
}

pub fn render(frame: &mut Frame, area: Rect, node: &ViewNode, focused: Option<usize>) {
    let mut focus = Focus { focused, next: 0 };
    render_node(frame, area, node, &mut focus);
}

fn render_node(frame: &mut Frame, area: Rect, node: &ViewNode, focus: &mut Focus) {
    match node {
        ViewNode::Text { content, style } => render_text(frame, area, content, *style),
        ViewNode::Button { label, .. } => {
            let is_focused = focus.focused == Some(focus.next);
            focus.next += 1;
            render_button(frame, area, label, is_focused);
        }
        ViewNode::Stack { axis, children } => {
            let rects = split_stack(area, *axis, children);
            for (child, rect) in children.iter().zip(rects) {
                render_node(frame, rect, child, focus);
            }
        }
        ViewNode::Spacer => {}
        ViewNode::TabStrip(strip) => render_tab_strip(frame, area, strip),
    }
}

fn render_text(frame: &mut Frame, area: Rect, content: &str, style: TextStyle) {
    let block = match style {
        TextStyle::Body => Block::default(),
        TextStyle::Title | TextStyle::Headline => Block::default().padding(Padding::vertical(1)),
    };
    let paragraph = Paragraph::new(content.to_string())
        .style(Theme::text(style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (border, text) = if focused {
        (Theme::border_focused(), Theme::button_focused())
    } else {
        (Theme::border(), Theme::button())
    };
    let width = button_width(label, area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };
    let paragraph = Paragraph::new(label.to_string())
        .style(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, rect);
}

/// Label width plus border and padding, clamped to `available`.
fn button_width(label: &str, available: u16) -> u16 {
    u16::try_from(label.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(available)
}

fn render_tab_strip(frame: &mut Frame, area: Rect, strip: &TabStrip) {
    let titles: Vec<Line> = strip
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let glyph = icon_glyph(&item.icon);
            let title = if glyph.is_empty() {
                format!("{} {}", i + 1, item.label)
            } else {
                format!("{} {} {}", i + 1, glyph, item.label)
            };
            Line::from(title)
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(strip.selected)
        .style(Theme::tab())
        .highlight_style(Theme::tab_active())
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Theme::border()),
        );
    frame.render_widget(tabs, area);
}
