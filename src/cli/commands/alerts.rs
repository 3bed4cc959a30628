use super::open_quiet_session;
use crate::config::Config;
use crate::core::notifier::low_quantity;
use crate::errors::AppResult;
use crate::models::Prescription;
use crate::ui::cabinet::render_table;
use crate::ui::messages::{success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_quiet_session(cfg)?;
    let list = session.visible()?;
    let low: Vec<Prescription> = low_quantity(&list, cfg.low_quantity_threshold)
        .into_iter()
        .cloned()
        .collect();

    if low.is_empty() {
        success(format!(
            "No active prescription is below {} units.",
            cfg.low_quantity_threshold
        ));
        return Ok(());
    }

    warning(format!(
        "{} active prescription(s) below {} units:",
        low.len(),
        cfg.low_quantity_threshold
    ));
    print!("{}", render_table(&low, cfg));
    Ok(())
}
