use super::{open_session, parse_switch};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::cabinet::render_detail;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AutoRefill { id, state } = cmd {
        let on = parse_switch(state)?;
        let mut session = open_session(cfg)?;
        session.show(id)?;

        // the notifier already reported the outcome
        session.set_auto_refill(on)?;

        if let Some(p) = session.selected()? {
            println!();
            print!("{}", render_detail(&p, cfg));
        }
    }
    Ok(())
}
