//! Data viewing and editing against the current profile.
//!
//! Edits run through the same session wiring the interactive app uses: the
//! profile's update callback requests an autosave, and the command finishes
//! with a forced save before the worker stops.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use pitwall_config::PitwallConfig;
use pitwall_core::{Profile, TEAM_DATA_POINTS, TIM_DATA_POINTS, datapoints};
use pitwall_store::{AppRegistry, AutoSaveManager, ProfileStore, lock};

use crate::cli::SetTarget;

fn current_profile(registry: &AppRegistry) -> anyhow::Result<String> {
    registry
        .current_profile()
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("no profile selected; run `pwl profile switch <name>`"))
}

pub fn show(store: &ProfileStore, registry: &AppRegistry) -> anyhow::Result<()> {
    let current = current_profile(registry)?;
    let profile = store.read(&current, Arc::new(|| {}))?;

    println!("profile '{current}'");

    let schedule = profile.schedule.get();
    println!("\nschedule: {} matches", schedule.len());

    let team_data = profile.team_data.get();
    println!("\nteam data ({} teams):", team_data.len());
    for (team, entry) in &team_data {
        let fields: Vec<String> = TEAM_DATA_POINTS
            .iter()
            .map(|point| format!("{}={}", point.name, (point.get)(entry).to_cell()))
            .collect();
        println!("  {team}: {}", fields.join(", "));
    }

    let tim_data = profile.tim_data.get();
    println!("\nteam-in-match data ({} matches):", tim_data.len());
    for (match_number, teams) in &tim_data {
        for (team, entry) in teams {
            let fields: Vec<String> = TIM_DATA_POINTS
                .iter()
                .map(|point| format!("{}={}", point.name, (point.get)(entry).to_cell()))
                .collect();
            println!("  match {match_number}, team {team}: {}", fields.join(", "));
        }
    }

    Ok(())
}

pub async fn set(
    target: SetTarget,
    config: &PitwallConfig,
    store: &ProfileStore,
    registry: &AppRegistry,
) -> anyhow::Result<()> {
    let current = current_profile(registry)?;
    let _guard = lock::acquire(store.paths(), &current).await?;

    // The save callback and the profile's update callback form a loop:
    // editing requests a save, the save reads the profile. Break the knot
    // with a slot the callback reads from.
    let profile_slot: Arc<OnceLock<Arc<Profile>>> = Arc::new(OnceLock::new());
    let save_slot = Arc::clone(&profile_slot);
    let save_store = store.clone();
    let save_name = current.clone();
    let mut autosave = AutoSaveManager::new(
        Duration::from_millis(config.general.autosave_debounce_ms),
        Arc::new(move || {
            if let Some(profile) = save_slot.get() {
                save_store.write(&save_name, profile)?;
            }
            Ok(())
        }),
    );

    let requests = autosave.request_handle();
    let profile = Arc::new(store.read(
        &current,
        Arc::new(move || {
            requests.notify_one();
        }),
    )?);
    let _ = profile_slot.set(Arc::clone(&profile));
    autosave.start();

    apply_edit(&profile, target)?;

    autosave.force_save()?;
    autosave.stop().await;
    tracing::debug!(profile = %current, "edit session saved");
    Ok(())
}

fn apply_edit(profile: &Profile, target: SetTarget) -> anyhow::Result<()> {
    match target {
        SetTarget::Team { team, field, value } => {
            let point = datapoints::team_data_point(&field).ok_or_else(|| {
                anyhow::anyhow!("unknown team field '{field}' (valid: {})", field_names_team())
            })?;
            let value = point.kind.parse(&value)?;
            profile.team_data.set_value(&team, point, value);
            println!("set {field} for team {team}");
        }
        SetTarget::Tim {
            match_number,
            team,
            field,
            value,
        } => {
            let point = datapoints::tim_data_point(&field).ok_or_else(|| {
                anyhow::anyhow!("unknown tim field '{field}' (valid: {})", field_names_tim())
            })?;
            let value = point.kind.parse(&value)?;
            profile.tim_data.set_value(&match_number, &team, point, value);
            println!("set {field} for team {team} in match {match_number}");
        }
    }
    Ok(())
}

fn field_names_team() -> String {
    TEAM_DATA_POINTS
        .iter()
        .map(|point| point.name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn field_names_tim() -> String {
    TIM_DATA_POINTS
        .iter()
        .map(|point| point.name)
        .collect::<Vec<_>>()
        .join(", ")
}
