use super::interface::ExampleAppletState;
use crate::applets::timestamp;
use crate::state::Accessor;
use crate::view::{TextStyle, ViewNode, ViewTree};

pub(super) const UPDATE_LABEL: &str = "Update Shared State (from ExampleApplet)";

pub(super) fn render(state: &Accessor<ExampleAppletState>, timestamp_format: &str) -> ViewTree {
    let value = state.with(|s| s.example_value.clone());

    let writer = state.clone();
    let format = timestamp_format.to_string();
    let update = move || {
        let stamp = timestamp(&format);
        writer.update(|s| s.example_value = format!("Updated by ExampleApplet at {}", stamp));
    };

    ViewNode::vstack(vec![
        ViewNode::text("Example Applet!", TextStyle::Title),
        ViewNode::Spacer,
        ViewNode::text(value, TextStyle::Headline),
        ViewNode::Spacer,
        ViewNode::button(UPDATE_LABEL, update),
    ])
}
