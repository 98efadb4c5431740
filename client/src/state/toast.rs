//! Transient notification queue.
//!
//! A bounded list of toasts with monotonically increasing ids. Pushing past
//! the visible limit drops the oldest entry. Timed dismissal is scheduled by
//! the `toaster` component in the browser; this type only holds the data.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use classroom::{InputError, Tool};

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// Browser auto-dismiss delay.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Destructive,
}

impl ToastKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Default => "toast",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Push a toast and return its id.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, title: title.into(), description: description.into(), kind });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Destructive toast for a missing required field.
    pub fn push_validation(&mut self, err: InputError) -> u64 {
        self.push(err.title(), err.hint(), ToastKind::Destructive)
    }

    /// Success toast for a finished generation request.
    pub fn push_completion(&mut self, tool: Tool) -> u64 {
        let notice = tool.completion();
        self.push(notice.title, notice.description, ToastKind::Default)
    }

    /// Destructive toast for a request that could not be completed.
    pub fn push_failure(&mut self, tool: Tool, message: &str) -> u64 {
        self.push(format!("{} request failed", tool.name()), message, ToastKind::Destructive)
    }

    /// Remove a toast by id. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
