//! Profile management commands.

use anyhow::Context;
use pitwall_store::{AppRegistry, ProfileStore};

use crate::cli::ProfileAction;

pub fn handle(
    action: ProfileAction,
    store: &ProfileStore,
    mut registry: AppRegistry,
) -> anyhow::Result<()> {
    match action {
        ProfileAction::List => {
            if registry.settings().profiles.is_empty() {
                println!("no profiles; create one with `pwl profile create <name>`");
                return Ok(());
            }
            for name in &registry.settings().profiles {
                let marker = if registry.current_profile() == Some(name) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {name}");
            }
            Ok(())
        }
        ProfileAction::Create { name } => {
            store.create(&name).context("creating profile")?;
            registry.add_profile(&name)?;
            if registry.current_profile().is_none() {
                registry.set_current(Some(&name))?;
            }
            println!("created profile '{name}'");
            Ok(())
        }
        ProfileAction::Switch { name } => {
            if !registry.contains(&name) {
                anyhow::bail!("unknown profile '{name}'; see `pwl profile list`");
            }
            registry.set_current(Some(&name))?;
            println!("current profile is now '{name}'");
            Ok(())
        }
        ProfileAction::Rename { old, new } => {
            if !registry.contains(&old) {
                anyhow::bail!("unknown profile '{old}'");
            }
            store.rename(&old, &new).context("renaming profile")?;
            registry.rename_profile(&old, &new)?;
            println!("renamed '{old}' to '{new}'");
            Ok(())
        }
        ProfileAction::Delete { name } => {
            if !registry.contains(&name) {
                anyhow::bail!("unknown profile '{name}'");
            }
            store.delete(&name).context("deleting profile")?;
            registry.remove_profile(&name)?;
            println!("moved '{name}' to the trash");
            Ok(())
        }
    }
}
