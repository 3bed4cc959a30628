use super::open_quiet_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::cabinet::render_categories;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = open_quiet_session(cfg)?;
    let filters = session.filters();
    print!(
        "{}",
        render_categories(filters.categories(), &filters.category().to_string())
    );
    Ok(())
}
