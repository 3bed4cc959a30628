pub mod cabinet;
pub mod messages;
pub mod notify;

pub use notify::{MemoryNotifier, Notice, NoticeHandle, NoticeKind, NoticeOptions, Notifier, TerminalNotifier};
