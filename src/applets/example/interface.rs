//! State shared by the example applets.
//!
//! Other applets depend on this module, never on [`ExampleApplet`] itself.
//!
//! [`ExampleApplet`]: super::ExampleApplet

use crate::state::{Accessor, StateError, StateKey, StateRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleAppletState {
    pub example_value: String,
}

impl Default for ExampleAppletState {
    fn default() -> Self {
        Self {
            example_value: "Hello, World!".to_string(),
        }
    }
}

pub const EXAMPLE_APPLET_STATE: StateKey<ExampleAppletState> =
    StateKey::new("example_applet.state", ExampleAppletState::default);

pub fn example_applet_state(
    registry: &StateRegistry,
) -> Result<Accessor<ExampleAppletState>, StateError> {
    registry.state(&EXAMPLE_APPLET_STATE)
}
