use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::Notifier;

pub fn handle(cmd: &Commands, cfg: &Config, notifier: &Notifier) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            print!("{}", yaml);
        }
        if *check {
            if cfg.store_dir.trim().is_empty() {
                return Err(AppError::Config("store_dir is empty".to_string()));
            }
            if cfg.history_count == 0 {
                notifier.warning("history_count is 0: tables will merge no prior records.");
            }
            notifier.success(format!(
                "Configuration OK ({})",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
