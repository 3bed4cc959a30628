use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::cabinet::render_detail;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut session = open_session(cfg)?;
        let p = session.show(id)?;
        println!();
        print!("{}", render_detail(&p, cfg));
    }
    Ok(())
}
