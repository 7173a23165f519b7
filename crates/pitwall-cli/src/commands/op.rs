//! Profile operation commands: build a preset pipeline, run it, print
//! per-step results.

use pitwall_config::PitwallConfig;
use pitwall_ops::{OpContext, OperationPreset, ProfileOperation, StepResult};
use pitwall_remote::RemoteClient;
use pitwall_store::{AppRegistry, ProfileStore};

use crate::cli::{OpAction, SyncAction};
use crate::progress::Progress;

pub async fn handle(
    action: OpAction,
    config: &PitwallConfig,
    store: ProfileStore,
    registry: AppRegistry,
    quiet: bool,
) -> anyhow::Result<()> {
    let preset = match action {
        OpAction::MergeFrom { other } => OperationPreset::MergeFrom {
            current: current_profile(&registry)?,
            other,
        },
        OpAction::MergeInto { target } => OperationPreset::MergeInto {
            current: current_profile(&registry)?,
            target,
        },
        OpAction::Duplicate { source, new_name } => {
            OperationPreset::Duplicate { source, new_name }
        }
        OpAction::ImportArchive { path, name } => OperationPreset::ImportArchive {
            path,
            new_name: name,
        },
        OpAction::ImportFolder { path, name } => OperationPreset::ImportFolder {
            path,
            new_name: name,
        },
        OpAction::ExportArchive { profile, dir } => OperationPreset::ExportArchive {
            source: profile,
            dir,
        },
        OpAction::ExportFolder { profile, dir } => OperationPreset::ExportFolder {
            source: profile,
            dir,
        },
        OpAction::ExportSpreadsheet { profile, dir } => OperationPreset::ExportSpreadsheet {
            source: profile,
            dir,
        },
    };

    run_operation(preset.build(), config, store, registry, quiet).await
}

pub async fn handle_sync(
    action: SyncAction,
    config: &PitwallConfig,
    store: ProfileStore,
    registry: AppRegistry,
    quiet: bool,
) -> anyhow::Result<()> {
    let preset = match action {
        SyncAction::Pull { username, name } => OperationPreset::Pull {
            username,
            new_name: name,
        },
        SyncAction::Push { username, profile } => OperationPreset::Push {
            source: match profile {
                Some(profile) => profile,
                None => current_profile(&registry)?,
            },
            username,
        },
    };

    run_operation(preset.build(), config, store, registry, quiet).await
}

fn current_profile(registry: &AppRegistry) -> anyhow::Result<String> {
    registry
        .current_profile()
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("no profile selected; run `pwl profile switch <name>`"))
}

async fn run_operation(
    operation: ProfileOperation,
    config: &PitwallConfig,
    store: ProfileStore,
    registry: AppRegistry,
    quiet: bool,
) -> anyhow::Result<()> {
    let remote = RemoteClient::from_config(&config.sync).ok();
    let ctx = OpContext::new(store, registry).with_remote(remote);

    let spinner = Progress::spinner("running operation", !quiet);
    operation.run(&ctx).await;
    spinner.finish();

    if print_results(&operation) {
        Ok(())
    } else {
        anyhow::bail!("operation finished with errors")
    }
}

/// Print one line per step. Returns false when any step failed.
fn print_results(operation: &ProfileOperation) -> bool {
    let state = operation.state();
    let mut ok = true;

    for input in operation.inputs() {
        match state.input_results.get(input.id()) {
            Some(StepResult::Success) => println!("  ok      input {}", input.source),
            Some(StepResult::Error(message)) => {
                ok = false;
                println!("  error   input {}: {message}", input.source);
            }
            None => println!("  skipped input {}", input.source),
        }
    }

    match &state.merge_result {
        Some(StepResult::Success) => println!("  ok      merge"),
        Some(StepResult::Error(message)) => {
            ok = false;
            println!("  error   merge: {message}");
        }
        None => println!("  skipped merge"),
    }

    for output in operation.outputs() {
        match state.output_results.get(output.id()) {
            Some(StepResult::Success) => println!("  ok      output {}", output.sink),
            Some(StepResult::Error(message)) => {
                ok = false;
                println!("  error   output {}: {message}", output.sink);
            }
            None => println!("  skipped output {}", output.sink),
        }
    }

    ok
}
