use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::Notifier;

/// Handle the `init` command: create the config directory, the
/// configuration file and the store directory.
pub fn handle(cli: &Cli, notifier: &Notifier) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;

    let cfg = Config::load();
    notifier.info(format!("Config file : {}", Config::config_file().display()));
    notifier.info(format!("Store dir   : {}", cli.store.as_deref().unwrap_or(&cfg.store_dir)));
    notifier.success("jornada initialization completed.");
    Ok(())
}
