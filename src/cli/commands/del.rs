use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::deletion::DeletionOutcome;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut session = open_session(cfg)?;
        let p = session
            .store()
            .find(id)?
            .ok_or_else(|| AppError::PrescriptionNotFound(id.clone()))?;

        session.request_delete(Some(id.as_str()))?;

        let prompt = format!(
            "Are you sure? This will permanently delete {}. This action cannot be undone.",
            p.name
        );
        if !*yes && !ask_confirmation(&prompt) {
            session.cancel_delete()?;
            info("Operation cancelled.");
            return Ok(());
        }

        if let DeletionOutcome::Deleted(_) = session.confirm_delete()? {
            info(format!(
                "{} prescription(s) left in this session. Use `medcabinet shell` to keep working on them.",
                session.store().len()?
            ));
        }
    }

    Ok(())
}
