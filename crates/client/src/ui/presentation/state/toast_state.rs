//! Toast queue for transient user-facing notices.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide toast queue. Pushing returns the toast id so callers can
/// dismiss early; the host component auto-dismisses after a few seconds.
#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = *self.next_id.read();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}
