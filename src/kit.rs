//! Composition root: which applets the host shows, in which order.
//!
//! Replace the destinations below with your own applets. A different
//! navigation model swaps [`AppletTab`] and [`navigation::TAB`] for your own
//! tag type and key.

use crate::applets::example::ExampleApplet;
use crate::applets::interop::ExampleAppletInteroperability;
use crate::config::UiConfig;
use crate::host::{Host, HostBuilder, HostError};
use crate::navigation::{self, AppletTab};
use crate::state::StateRegistry;

pub fn compose(registry: &StateRegistry, ui: &UiConfig) -> Result<Host<AppletTab>, HostError> {
    HostBuilder::new(registry, navigation::TAB)
        .destination(
            AppletTab::Home,
            "Home (Example)",
            "house",
            ExampleApplet::new(registry, &ui.timestamp_format)?,
        )
        .destination(
            AppletTab::Settings,
            "Settings (Example)",
            "gear",
            ExampleAppletInteroperability::new(registry, &ui.timestamp_format)?,
        )
        .build()
}
