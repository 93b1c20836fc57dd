use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::view::ViewTree;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{debug, info};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Right => Action::NextTab,
        KeyCode::BackTab | KeyCode::Left => Action::PreviousTab,
        KeyCode::Down => Action::FocusNext,
        KeyCode::Up => Action::FocusPrevious,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Press,
        KeyCode::Char(c @ '1'..='9') => Action::SelectTab(c as usize - '1' as usize),
        _ => return vec![],
    };
    vec![action]
}

/// Apply an action against the tree currently on screen.
///
/// `tree` must be a clone owned by the caller: pressing a button or picking
/// a tab writes state, which re-renders the host while callbacks from this
/// tree are still running.
pub fn apply(state: &mut AppState, tree: &ViewTree, action: &Action) {
    debug!(?action, "applying action");
    match action {
        Action::NextTab | Action::PreviousTab | Action::SelectTab(_) => select_tab(state, tree, action),
        Action::FocusNext | Action::FocusPrevious => {
            let count = tree.buttons().len();
            if count == 0 {
                return;
            }
            let current = state.focused(count).unwrap_or(0);
            state.focus = if *action == Action::FocusNext {
                (current + 1) % count
            } else {
                (current + count - 1) % count
            };
            state.dirty = true;
        }
        Action::Press => {
            let buttons = tree.buttons();
            if let Some((label, on_press)) = state.focused(buttons.len()).map(|i| buttons[i]) {
                on_press.call();
                info!(button = label, "button pressed");
            } else {
                state.set_status("Nothing to press");
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}

fn select_tab(state: &mut AppState, tree: &ViewTree, action: &Action) {
    let Some(strip) = tree.tab_strip() else {
        return;
    };
    let count = strip.items.len();
    if count == 0 {
        return;
    }
    let target = match *action {
        Action::NextTab => (strip.selected + 1) % count,
        Action::PreviousTab => (strip.selected + count - 1) % count,
        Action::SelectTab(index) if index < count => index,
        Action::SelectTab(index) => {
            state.set_status(format!("No tab {}", index + 1));
            return;
        }
        _ => return,
    };
    if target == strip.selected {
        return;
    }

    strip.on_select.call(target);
    state.focus = 0;
    let label = &strip.items[target].label;
    info!(tab = %label, "navigated");
    state.set_status(format!("Switched to {}", label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SelectCallback, TabLabel, TabStrip, TextStyle, ViewNode};
    use crossterm::event::{KeyEventState, KeyModifiers};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn tree(selected: usize, picked: Rc<Cell<Option<usize>>>, pressed: Rc<Cell<u32>>) -> ViewTree {
        let first = Rc::clone(&pressed);
        ViewNode::vstack(vec![
            ViewNode::text("body", TextStyle::Body),
            ViewNode::button("One", move || first.set(first.get() + 1)),
            ViewNode::button("Two", move || pressed.set(pressed.get() + 10)),
            ViewNode::TabStrip(TabStrip {
                items: ["A", "B", "C"]
                    .iter()
                    .map(|l| TabLabel {
                        label: l.to_string(),
                        icon: String::new(),
                    })
                    .collect(),
                selected,
                on_select: SelectCallback::new(move |i| picked.set(Some(i))),
            }),
        ])
    }

    fn state() -> AppState {
        AppState::new(Duration::from_secs(3))
    }

    #[test]
    fn test_key_mapping() {
        let mut s = state();
        assert_eq!(handle_event(&mut s, key(KeyCode::Tab)), vec![Action::NextTab]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Left)), vec![Action::PreviousTab]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('2'))), vec![Action::SelectTab(1)]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Enter)), vec![Action::Press]);
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert!(handle_event(&mut s, key(KeyCode::Char('x'))).is_empty());

        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut s, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let picked = Rc::new(Cell::new(None));
        let mut s = state();

        apply(&mut s, &tree(2, Rc::clone(&picked), Rc::default()), &Action::NextTab);
        assert_eq!(picked.get(), Some(0));
        assert_eq!(s.status_message.as_ref().unwrap().text, "Switched to A");

        apply(&mut s, &tree(0, Rc::clone(&picked), Rc::default()), &Action::PreviousTab);
        assert_eq!(picked.get(), Some(2));
    }

    #[test]
    fn test_select_tab_out_of_range() {
        let picked = Rc::new(Cell::new(None));
        let mut s = state();
        apply(&mut s, &tree(0, Rc::clone(&picked), Rc::default()), &Action::SelectTab(5));
        assert_eq!(picked.get(), None);
        assert_eq!(s.status_message.as_ref().unwrap().text, "No tab 6");
    }

    #[test]
    fn test_selecting_current_tab_is_a_no_op() {
        let picked = Rc::new(Cell::new(None));
        let mut s = state();
        apply(&mut s, &tree(1, Rc::clone(&picked), Rc::default()), &Action::SelectTab(1));
        assert_eq!(picked.get(), None);
    }

    #[test]
    fn test_focus_and_press() {
        let pressed = Rc::new(Cell::new(0));
        let view = tree(0, Rc::default(), Rc::clone(&pressed));
        let mut s = state();

        apply(&mut s, &view, &Action::Press);
        assert_eq!(pressed.get(), 1);

        apply(&mut s, &view, &Action::FocusNext);
        apply(&mut s, &view, &Action::Press);
        assert_eq!(pressed.get(), 11);

        apply(&mut s, &view, &Action::FocusNext);
        assert_eq!(s.focus, 0);
        apply(&mut s, &view, &Action::FocusPrevious);
        assert_eq!(s.focus, 1);
    }

    #[test]
    fn test_press_without_buttons() {
        let mut s = state();
        apply(&mut s, &ViewNode::Spacer, &Action::Press);
        assert_eq!(s.status_message.as_ref().unwrap().text, "Nothing to press");
    }

    #[test]
    fn test_quit() {
        let mut s = state();
        apply(&mut s, &ViewNode::Spacer, &Action::Quit);
        assert!(s.should_quit);
    }
}
