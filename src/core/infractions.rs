//! Infraction annotation.
//!
//! After reconciliation the new rows are flagged with any infractions the
//! store computes over the full table. The lookup is retried a bounded
//! number of times and a failure is logged and absorbed: the table stays
//! usable without annotations.

use crate::models::day_record::Origin;
use crate::models::table::JourneyTable;
use crate::store::JourneyStore;
use crate::store::wire::table_to_wire;
use crate::utils::retry::{RetryOutcome, RetryPolicy, retry_until};

pub async fn annotate_infractions(
    store: &dyn JourneyStore,
    motorist_id: &str,
    table: &mut JourneyTable,
    policy: RetryPolicy,
) {
    let context = table_to_wire(table);

    let outcome = retry_until(policy, || async {
        match store.fetch_infractions(motorist_id, &context).await {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::warn!(error = %e, "infraction lookup failed");
                None
            }
        }
    })
    .await;

    let infractions = match outcome {
        RetryOutcome::Ready(list) => list,
        RetryOutcome::Exhausted => {
            tracing::warn!(
                motorist_id,
                attempts = policy.max_attempts,
                "infraction lookup exhausted all attempts, rows left unannotated"
            );
            return;
        }
    };

    for row in &mut table.rows {
        if row.origin != Origin::New {
            continue;
        }
        row.infractions = infractions
            .iter()
            .filter(|i| i.date == row.date)
            .map(|i| i.description.clone())
            .collect();
    }
}
