use std::fmt;

/// Severity level for user-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Sink for user-facing messages (the host's toast area, a terminal, a log).
pub trait Notifier {
    fn notify(&mut self, level: NotificationLevel, message: &str);

    fn info(&mut self, message: &str) {
        self.notify(NotificationLevel::Info, message);
    }

    fn warning(&mut self, message: &str) {
        self.notify(NotificationLevel::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(NotificationLevel::Error, message);
    }
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// A [`Notifier`] that records every notification in order.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// The most recently recorded notification.
    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.items.push(Notification {
            level,
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut queue = NotificationQueue::default();
        queue.info("one");
        queue.info("two");
        queue.info("three");
        assert_eq!(queue.len(), 3);
        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);
    }

    #[test]
    fn notifier_helpers_set_level() {
        let mut queue = NotificationQueue::default();
        assert!(queue.is_empty());
        queue.warning("name taken");
        assert_eq!(queue.last().unwrap().level, NotificationLevel::Warning);
        queue.error("write failed");
        assert_eq!(queue.last().unwrap().level, NotificationLevel::Error);
        assert!(!queue.is_empty());
    }

    #[test]
    fn level_display() {
        assert_eq!(NotificationLevel::Info.to_string(), "info");
        assert_eq!(NotificationLevel::Warning.to_string(), "warning");
        assert_eq!(NotificationLevel::Error.to_string(), "error");
    }
}
