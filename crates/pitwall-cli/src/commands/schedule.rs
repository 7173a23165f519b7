//! Match schedule installation.

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use pitwall_core::{MatchSchedule, fill_gaps};
use pitwall_store::{AppRegistry, ProfileStore, lock};

use crate::cli::ScheduleAction;

pub async fn handle(
    action: ScheduleAction,
    store: &ProfileStore,
    registry: &AppRegistry,
) -> anyhow::Result<()> {
    match action {
        ScheduleAction::Import { file } => {
            let current = registry
                .current_profile()
                .map(str::to_owned)
                .ok_or_else(|| {
                    anyhow::anyhow!("no profile selected; run `pwl profile switch <name>`")
                })?;
            let _guard = lock::acquire(store.paths(), &current).await?;

            let schedule: MatchSchedule = serde_json::from_slice(
                &fs::read(&file).with_context(|| format!("reading {}", file.display()))?,
            )
            .context("parsing match schedule")?;

            let profile = store.read(&current, Arc::new(|| {}))?;
            profile.schedule.set(schedule);
            fill_gaps(&profile);
            store.write(&current, &profile)?;

            let schedule = profile.schedule.get();
            println!(
                "installed schedule with {} matches into '{current}'",
                schedule.len()
            );
            Ok(())
        }
    }
}
