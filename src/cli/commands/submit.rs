use std::io::{self, BufRead, Write};

use crate::cli::commands::{build_confirmation_table, render_table, report_infractions};
use crate::config::Config;
use crate::core::submit::{ConflictPrompt, SubmitOutcome, negotiate_save};
use crate::errors::{AppError, AppResult};
use crate::models::EntryFile;
use crate::models::conflict::Conflict;
use crate::store::json::JsonFileStore;
use crate::store::wire::SavePayload;
use crate::ui::Notifier;

/// Conflict confirmation over stdin; `--yes` short-circuits to confirm.
struct StdinPrompt {
    assume_yes: bool,
    notifier: Notifier,
}

impl ConflictPrompt for StdinPrompt {
    fn confirm_replace(&self, conflicts: &[Conflict]) -> bool {
        self.notifier.warning("Conflitos encontrados. Já existem registros para:");
        for conflict in conflicts {
            self.notifier.warning(format!("  {}", conflict.summary()));
        }
        if self.assume_yes {
            return true;
        }
        print!("Substituir? [y/N] ");
        io::stdout().flush().ok();
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer).ok();
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "sim")
    }
}

/// Handle the `submit` command: build the confirmation table and persist
/// its new rows, negotiating conflicts with at most one override retry.
pub async fn handle(
    file: &str,
    assume_yes: bool,
    cfg: &Config,
    notifier: &Notifier,
) -> AppResult<()> {
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

    let payload = SavePayload::from_table(
        &table,
        &entry.motorist_id,
        &entry.motorist_name,
        &entry.truck_id,
        &entry.plate,
    );

    let prompt = StdinPrompt {
        assume_yes,
        notifier: *notifier,
    };

    notifier.progress("Saving table...");
    match negotiate_save(&store, &prompt, payload).await? {
        SubmitOutcome::Saved(message) => {
            notifier.success(message);
            Ok(())
        }
        SubmitOutcome::Cancelled(_) => {
            notifier.warning("Save cancelled; entered data was not persisted.");
            Ok(())
        }
    }
}
