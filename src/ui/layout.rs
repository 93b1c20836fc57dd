use crate::view::{Axis, TextStyle, ViewNode};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub view: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: view tree | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // View tree
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        view: chunks[0],
        status_bar: chunks[1],
    }
}

/// Split `area` among the children of a stack.
pub fn split_stack(area: Rect, axis: Axis, children: &[ViewNode]) -> Vec<Rect> {
    let direction = match axis {
        Axis::Vertical => Direction::Vertical,
        Axis::Horizontal => Direction::Horizontal,
    };
    let constraints: Vec<Constraint> = children
        .iter()
        .map(|child| match axis {
            Axis::Vertical => height_of(child),
            Axis::Horizontal => Constraint::Fill(1),
        })
        .collect();
    Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn height_of(node: &ViewNode) -> Constraint {
    match node {
        ViewNode::Text {
            style: TextStyle::Body,
            ..
        } => Constraint::Length(1),
        // Title and headline get a line of padding above and below
        ViewNode::Text { .. } => Constraint::Length(3),
        ViewNode::Button { .. } => Constraint::Length(3),
        ViewNode::TabStrip(_) => Constraint::Length(3),
        ViewNode::Spacer | ViewNode::Stack { .. } => Constraint::Fill(1),
    }
}
