//! User-facing notices.
//!
//! The workflow layer never re-throws backend errors; it converts them into
//! notices the presentation layer shows as toasts. Messages are opaque,
//! human-readable strings without structured codes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Collected notices pending display.
#[derive(Debug, Default)]
pub struct NoticeLog {
    entries: Vec<Notice>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.entries.push(Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.entries.push(Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    /// Drain pending notices for display.
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.entries)
    }

    pub fn first_error(&self) -> Option<&Notice> {
        self.entries
            .iter()
            .find(|n| n.level == NoticeLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_drains() {
        let mut log = NoticeLog::new();
        log.success("saved");
        log.error("failed");

        let taken = log.take();
        assert_eq!(taken.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_first_error() {
        let mut log = NoticeLog::new();
        log.success("saved");
        assert!(log.first_error().is_none());
        log.error("failed");
        assert_eq!(log.first_error().unwrap().message, "failed");
    }
}
