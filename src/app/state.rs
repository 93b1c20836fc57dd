use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

/// Front-end state that is not shared with applets: button focus, the
/// transient status line, and loop control.
#[derive(Debug)]
pub struct AppState {
    /// Index into the active view's buttons, in depth-first order.
    pub focus: usize,
    pub status_message: Option<StatusMessage>,
    pub status_timeout: Duration,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(status_timeout: Duration) -> Self {
        Self {
            focus: 0,
            status_message: None,
            status_timeout,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            set_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the status message once it is older than the timeout.
    pub fn expire_status(&mut self, now: Instant) {
        let expired = self
            .status_message
            .as_ref()
            .is_some_and(|msg| now.duration_since(msg.set_at) >= self.status_timeout);
        if expired {
            self.status_message = None;
            self.dirty = true;
        }
    }

    /// Focus index clamped to `buttons` entries.
    pub fn focused(&self, buttons: usize) -> Option<usize> {
        if buttons == 0 {
            None
        } else {
            Some(self.focus.min(buttons - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_expires_after_timeout() {
        let mut state = AppState::new(Duration::from_millis(100));
        state.set_status("hello");
        let set_at = state.status_message.as_ref().unwrap().set_at;
        state.dirty = false;

        state.expire_status(set_at + Duration::from_millis(50));
        assert!(state.status_message.is_some());
        assert!(!state.dirty);

        state.expire_status(set_at + Duration::from_millis(100));
        assert!(state.status_message.is_none());
        assert!(state.dirty);
    }

    #[test]
    fn test_focused_clamps() {
        let mut state = AppState::new(Duration::from_secs(1));
        assert_eq!(state.focused(0), None);
        state.focus = 5;
        assert_eq!(state.focused(2), Some(1));
        state.focus = 0;
        assert_eq!(state.focused(2), Some(0));
    }
}
