use super::{open_quiet_session, open_session, parse_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::cabinet::{render_cabinet, render_table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        category,
        status,
        json,
        cabinet,
    } = cmd
    {
        // JSON goes to stdout untouched, so no alert there
        let mut session = if *json {
            open_quiet_session(cfg)?
        } else {
            open_session(cfg)?
        };

        if let Some(s) = status {
            session.filter_status(parse_status(s)?)?;
        }
        if let Some(c) = category {
            session.filter_category(c)?;
        }

        let list = session.visible()?;
        if *json {
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else if *cabinet {
            print!("{}", render_cabinet(&list, cfg));
        } else {
            print!("{}", render_table(&list, cfg));
        }
    }
    Ok(())
}
