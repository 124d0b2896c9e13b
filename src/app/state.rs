/// Signal returned by every mutation handler so the view layer can decide
/// whether the frame needs a redraw, instead of repainting implicitly
/// after every interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Needed,
    NotNeeded,
}

impl Refresh {
    /// Folds the signals from several handlers in one frame.
    pub fn or(self, other: Refresh) -> Refresh {
        if self == Refresh::Needed || other == Refresh::Needed {
            Refresh::Needed
        } else {
            Refresh::NotNeeded
        }
    }
}

/// Outcome message from the most recent user action, shown until the next
/// mutation replaces it.
#[derive(Debug, Clone)]
pub enum Notice {
    Success(String),
    Warning(String),
}

/// Per-session presentation state. Owned by the app, never global.
#[derive(Default)]
pub struct SessionState {
    pub notice: Option<Notice>,
}

impl SessionState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Success(message.into()));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Warning(message.into()));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_notice_wins() {
        let mut state = SessionState::default();
        state.success("uploaded");
        state.warn("delete failed");

        assert!(matches!(
            state.notice,
            Some(Notice::Warning(ref msg)) if msg == "delete failed"
        ));

        state.clear_notice();
        assert!(state.notice.is_none());
    }
}
