use crate::core::validator;
use crate::errors::{AppError, AppResult};
use crate::models::EntryFile;
use crate::ui::Notifier;

/// Handle the `validate` command: check every day block of the entry file
/// and report the aggregated errors, if any. Nothing reaches the store.
pub fn handle(file: &str, notifier: &Notifier) -> AppResult<()> {
    let entry = EntryFile::load(file)?;

    match validator::validate_blocks(&entry.days, &entry.plate) {
        Ok(records) => {
            notifier.success(format!("{} day block(s) valid.", records.len()));
            Ok(())
        }
        Err(AppError::Validation(errors)) => {
            for error in &errors {
                notifier.error(error);
            }
            Err(AppError::Validation(errors))
        }
        Err(e) => Err(e),
    }
}
