//! Notification surface.
//!
//! The core only raises notices through the [`Notifier`] trait; how they are
//! presented is up to the implementation. Sticky notices stay on the board
//! until dismissed, everything else is fire-and-forget.

use super::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeOptions {
    /// Extra lines shown under the title.
    pub description: Vec<String>,
    /// Never expires; stays until dismissed.
    pub sticky: bool,
}

impl NoticeOptions {
    pub fn describe(line: impl Into<String>) -> Self {
        Self {
            description: vec![line.into()],
            sticky: false,
        }
    }

    pub fn sticky(description: Vec<String>) -> Self {
        Self {
            description,
            sticky: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub handle: NoticeHandle,
    pub kind: NoticeKind,
    pub message: String,
    pub options: NoticeOptions,
}

pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str, options: NoticeOptions) -> NoticeHandle;

    /// Returns `false` if the handle is unknown or already dismissed.
    fn dismiss(&mut self, handle: NoticeHandle) -> bool;

    /// Sticky notices still on the board, oldest first.
    fn sticky(&self) -> &[Notice];

    fn info(&mut self, message: &str) -> NoticeHandle {
        self.notify(NoticeKind::Info, message, NoticeOptions::default())
    }

    fn success(&mut self, message: &str, description: &str) -> NoticeHandle {
        self.notify(
            NoticeKind::Success,
            message,
            NoticeOptions::describe(description),
        )
    }

    fn warning(&mut self, message: &str) -> NoticeHandle {
        self.notify(NoticeKind::Warning, message, NoticeOptions::default())
    }

    fn error(&mut self, message: &str) -> NoticeHandle {
        self.notify(NoticeKind::Error, message, NoticeOptions::default())
    }

    /// Dismiss every sticky notice; returns how many were removed.
    fn dismiss_all(&mut self) -> usize {
        let handles: Vec<NoticeHandle> = self.sticky().iter().map(|n| n.handle).collect();
        handles.into_iter().filter(|h| self.dismiss(*h)).count()
    }
}

/// Handle allocation and sticky bookkeeping shared by the notifiers.
#[derive(Debug, Default)]
struct Board {
    next: u64,
    sticky: Vec<Notice>,
}

impl Board {
    fn post(&mut self, kind: NoticeKind, message: &str, options: NoticeOptions) -> Notice {
        self.next += 1;
        let notice = Notice {
            handle: NoticeHandle(self.next),
            kind,
            message: message.to_string(),
            options,
        };
        if notice.options.sticky {
            self.sticky.push(notice.clone());
        }
        notice
    }

    fn dismiss(&mut self, handle: NoticeHandle) -> bool {
        let before = self.sticky.len();
        self.sticky.retain(|n| n.handle != handle);
        self.sticky.len() != before
    }
}

/// Prints notices to the terminal as they are raised.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    board: Board,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn print_notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Info => messages::info(&notice.message),
        NoticeKind::Success => messages::success(&notice.message),
        NoticeKind::Warning => messages::warning(&notice.message),
        NoticeKind::Error => messages::error(&notice.message),
    }
    for (i, line) in notice.options.description.iter().enumerate() {
        if notice.options.sticky && notice.options.description.len() > 1 {
            messages::detail(format!("{}. {}", i + 1, line));
        } else {
            messages::detail(line);
        }
    }
    if notice.options.sticky {
        messages::detail("(type `dismiss` to close)");
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str, options: NoticeOptions) -> NoticeHandle {
        let notice = self.board.post(kind, message, options);
        print_notice(&notice);
        notice.handle
    }

    fn dismiss(&mut self, handle: NoticeHandle) -> bool {
        self.board.dismiss(handle)
    }

    fn sticky(&self) -> &[Notice] {
        &self.board.sticky
    }
}

/// Keeps every notice in memory instead of printing it.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    board: Board,
    history: Vec<Notice>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notice raised so far, in order.
    pub fn history(&self) -> &[Notice] {
        &self.history
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.history.iter().filter(|n| n.kind == kind).count()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.history.last()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, kind: NoticeKind, message: &str, options: NoticeOptions) -> NoticeHandle {
        let notice = self.board.post(kind, message, options);
        let handle = notice.handle;
        self.history.push(notice);
        handle
    }

    fn dismiss(&mut self, handle: NoticeHandle) -> bool {
        self.board.dismiss(handle)
    }

    fn sticky(&self) -> &[Notice] {
        &self.board.sticky
    }
}
