//! Terminal renderer for view trees.

mod layout;
mod status_bar;
mod theme;
mod view_tree;

use crate::app::state::AppState;
use crate::view::ViewTree;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, tree: &ViewTree, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    let focused = state.focused(tree.buttons().len());
    view_tree::render(frame, app_layout.view, tree, focused);
    status_bar::render(frame, app_layout.status_bar, tree, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::kit;
    use crate::navigation::AppletTab;
    use crate::state::StateRegistry;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn draw(tree: &ViewTree, state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, tree, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_active_applet_and_tabs() {
        let registry = StateRegistry::new();
        let host = kit::compose(&registry, &UiConfig::default()).unwrap();
        let state = AppState::new(Duration::from_secs(3));

        let screen = draw(&host.view(), &state);
        assert!(screen.contains("Example Applet!"));
        assert!(screen.contains("Hello, World!"));
        assert!(screen.contains("Update Shared State (from ExampleApplet)"));
        assert!(screen.contains("Home (Example)"));
        assert!(screen.contains("Settings (Example)"));
        assert!(screen.contains("[1/2]"));

        host.selection().set(AppletTab::Settings);
        let screen = draw(&host.view(), &state);
        assert!(screen.contains("Example Applet Interoperability!"));
        assert!(screen.contains("[2/2]"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let registry = StateRegistry::new();
        let host = kit::compose(&registry, &UiConfig::default()).unwrap();
        let mut state = AppState::new(Duration::from_secs(3));

        assert!(draw(&host.view(), &state).contains("Enter press"));
        state.set_status("Switched to Home (Example)");
        let screen = draw(&host.view(), &state);
        assert!(screen.contains("Switched to Home (Example)"));
        assert!(!screen.contains("Enter press"));
    }
}
