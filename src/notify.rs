//! Notification Sink
//!
//! Every success or failure the user should hear about ends up here as a
//! toast that disappears on its own.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::NOTICE_LIFETIME_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast toast-success",
            NoticeLevel::Error => "toast toast-error",
            NoticeLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub text: String,
}

/// Notices on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u32,
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, level, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Toast queue shared through context
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    queue: RwSignal<NoticeQueue>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn push(&self, level: NoticeLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            NoticeLevel::Error => log::warn!("[NOTICE] {}", text),
            _ => log::info!("[NOTICE] {}", text),
        }
        let mut id = 0;
        self.queue.update(|q| id = q.push(level, text));
        let board = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
            board.dismiss(id);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeLevel::Info, text);
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_and_dismiss_targets_one() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(NoticeLevel::Success, "Rule added");
        let b = queue.push(NoticeLevel::Error, "Network error");
        assert!(b > a);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].text, "Network error");
        assert_eq!(queue.items()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut queue = NoticeQueue::default();
        queue.push(NoticeLevel::Info, "hello");
        queue.dismiss(99);
        assert_eq!(queue.items().len(), 1);
    }
}
