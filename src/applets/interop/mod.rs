//! Reads and writes the same slot as [`ExampleApplet`] to show that two
//! independently built applets see each other's changes.
//!
//! Depends only on `example::interface`.
//!
//! [`ExampleApplet`]: crate::applets::example::ExampleApplet

mod root_view;

use crate::applet::Applet;
use crate::applets::example::interface::{self, ExampleAppletState};
use crate::state::{Accessor, StateError, StateRegistry};
use crate::view::ViewTree;

pub struct ExampleAppletInteroperability {
    state: Accessor<ExampleAppletState>,
    timestamp_format: String,
}

impl ExampleAppletInteroperability {
    pub const ID: &'static str = "example.applet.interoperability";
    pub const TITLE: &'static str = "Example Interoperability";

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

impl Applet for ExampleAppletInteroperability {
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
    use crate::applets::example::ExampleApplet;

    #[test]
    fn test_sees_write_from_example_applet() {
        let registry = StateRegistry::new();
        let example = ExampleApplet::new(&registry, "%H:%M:%S").unwrap();
        let interop = ExampleAppletInteroperability::new(&registry, "%H:%M:%S").unwrap();
        assert!(interop.render().contains_text("Hello, World!"));

        // Writer obtained independently of either applet.
        interface::example_applet_state(&registry)
            .unwrap()
            .update(|s| s.example_value = "Updated by A at T1".into());

        assert!(interop.render().contains_text("Updated by A at T1"));
        assert!(!interop.render().contains_text("Hello, World!"));
        assert!(example.render().contains_text("Updated by A at T1"));
    }

    #[test]
    fn test_button_is_visible_to_example_applet() {
        let registry = StateRegistry::new();
        let example = ExampleApplet::new(&registry, "T2").unwrap();
        let interop = ExampleAppletInteroperability::new(&registry, "T2").unwrap();

        interop
            .render()
            .find_button(root_view::UPDATE_LABEL)
            .unwrap()
            .call();

        assert!(example
            .render()
            .contains_text("Updated by InteropApplet at T2"));
    }
}
