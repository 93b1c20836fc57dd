//! A basic applet: shows the shared example value and a button that writes it.

pub mod interface;
mod root_view;

use crate::applet::Applet;
use crate::state::{Accessor, StateError, StateRegistry};
use crate::view::ViewTree;
use interface::ExampleAppletState;

pub struct ExampleApplet {
    state: Accessor<ExampleAppletState>,
    timestamp_format: String,
}

impl ExampleApplet {
    pub const ID: &'static str = "example.applet";
    pub const TITLE: &'static str = "Example Applet";

    pub fn new(
        registry: &StateRegistry,
        timestamp_format: impl Into<String>,
    ) -> Result<Self, StateError> {
        Ok(Self {
            state: interface::example_applet_state(registry)?,
            timestamp_format: timestamp_format.into(),
        })
    }
}

impl Applet for ExampleApplet {
    fn id(&self) -> &str {
        Self::ID
    }

    fn title(&self) -> &str {
        Self::TITLE
    }

    fn render(&self) -> ViewTree {
        root_view::render(&self.state, &self.timestamp_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_initial_value() {
        let registry = StateRegistry::new();
        let applet = ExampleApplet::new(&registry, "%H:%M:%S").unwrap();
        let tree = applet.render();
        assert_eq!(tree.texts(), vec!["Example Applet!", "Hello, World!"]);
        assert_eq!(applet.id(), "example.applet");
        assert_eq!(applet.title(), "Example Applet");
    }

    #[test]
    fn test_button_writes_shared_state() {
        let registry = StateRegistry::new();
        let applet = ExampleApplet::new(&registry, "T1").unwrap();
        applet
            .render()
            .find_button(root_view::UPDATE_LABEL)
            .unwrap()
            .call();

        let value = interface::example_applet_state(&registry)
            .unwrap()
            .get()
            .example_value;
        assert_eq!(value, "Updated by ExampleApplet at T1");
        assert!(applet.render().contains_text("Updated by ExampleApplet at T1"));
    }
}
