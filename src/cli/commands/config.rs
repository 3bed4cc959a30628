use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        let path = cli.config.clone().unwrap_or_else(Config::config_file);

        if *init {
            if Config::init_file(&path, *force)? {
                success(format!("Config file: {}", path.display()));
            } else {
                info(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            }
        }

        if *print_config || !*init {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
