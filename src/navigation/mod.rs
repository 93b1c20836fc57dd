//! Tab navigation state for the example host.
//!
//! [`AppletTab`] is the closed set of destinations and [`TAB`] the registry
//! key holding the current selection. A different navigation model replaces
//! both; the host is generic over the tag type.

use crate::state::{Accessor, StateError, StateKey, StateRegistry};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppletTab {
    Home,
    Settings,
}

impl AppletTab {
    pub const ALL: [AppletTab; 2] = [AppletTab::Home, AppletTab::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            AppletTab::Home => "home",
            AppletTab::Settings => "settings",
        }
    }
}

impl fmt::Display for AppletTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab `{0}`")]
pub struct UnknownTab(pub String);

impl FromStr for AppletTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AppletTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// The selected tab. Starts on [`AppletTab::Home`].
pub const TAB: StateKey<AppletTab> = StateKey::new("navigation.tab", initial_tab);

fn initial_tab() -> AppletTab {
    AppletTab::Home
}

pub fn tab(registry: &StateRegistry) -> Result<Accessor<AppletTab>, StateError> {
    registry.state(&TAB)
}
