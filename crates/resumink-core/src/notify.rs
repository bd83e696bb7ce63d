//! Transient user-facing notifications.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A short message the host shows and then discards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }
}

/// FIFO of pending notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => log::info!("{}", notification.message),
            NotificationLevel::Error => log::warn!("{}", notification.message),
        }
        self.pending.push_back(notification);
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_order() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::success("one"));
        queue.push(Notification::error("two"));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].message, "one");
        assert_eq!(drained[1].level, NotificationLevel::Error);
        assert!(queue.is_empty());
    }
}
