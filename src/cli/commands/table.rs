use crate::cli::commands::{build_confirmation_table, render_table, report_infractions};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EntryFile;
use crate::store::json::JsonFileStore;
use crate::ui::Notifier;

/// Handle the `table` command: build and print the confirmation table.
pub async fn handle(file: &str, cfg: &Config, notifier: &Notifier) -> AppResult<()> {
    let entry = EntryFile::load(file)?;
    let store = JsonFileStore::new(&cfg.store_dir);

    let table = match build_confirmation_table(&entry, &store, cfg, notifier).await {
        Ok(table) => table,
        Err(AppError::Validation(errors)) => {
            for error in &errors {
                notifier.error(error);
            }
            return Err(AppError::Validation(errors));
        }
        Err(e) => return Err(e),
    };

    print!("{}", render_table(&table));
    report_infractions(&table, notifier);
    Ok(())
}
