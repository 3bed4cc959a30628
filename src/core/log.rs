use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "patch" => Colour::Yellow,
        "delete" => Colour::Red,
        "filter" => Colour::Cyan,
        "reset" => Colour::Blue,
        "alert" => Colour::RGB(255, 153, 51), // orange
        "restart" => Colour::Purple,
        _ => Colour::White,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Session-scoped journal of what changed the cabinet. Gone with the session.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(LogEntry {
            id: self.entries.len() + 1,
            date: Local::now().format("%FT%T%:z").to_string(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "📜 Activity log is empty.\n".to_string();
        }

        let op_w = self
            .entries
            .iter()
            .map(|e| op_target(e).width())
            .max()
            .unwrap_or(10)
            .min(60);
        let id_w = self.entries.len().to_string().len();
        let date_w = self.entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut out = String::from("📜 Activity log:\n\n");
        for e in &self.entries {
            let color = color_for_operation(&e.operation);

            let mut visible = op_target(e);
            if visible.width() > 60 {
                visible = visible.chars().take(57).collect::<String>();
                visible.push_str("...");
            }

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).width()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                e.id, e.date, colored, padding, e.message,
            ));
        }
        out
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
