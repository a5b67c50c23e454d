//! Trigger-poll-download flow for on-demand backups.
//!
//! The provider's backup trigger is asynchronous: it answers with a recipe,
//! and the resulting backup only shows up in the deployment's backup list
//! once the recipe completes. The flow here is sequential awaited calls with
//! an explicit poll loop; there is no retry cap or overall timeout, an
//! operator interrupt is the only way out of a recipe that never completes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use backstop_models::{Backup, Recipe};

use crate::client::Client;
use crate::download;
use crate::error::Result;

/// Default delay between recipe polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct PollOptions {
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// How an on-demand run ended, short of an error.
#[derive(Debug)]
pub enum StartOutcome {
    Downloaded(PathBuf),
    /// The recipe completed but the deployment's backup list held no
    /// on-demand entry. A benign empty result, not a failure.
    NoOnDemandFound,
}

/// Trigger an on-demand backup for `deployment_id`, wait for the recipe to
/// complete, then locate and download the resulting archive into
/// `target_dir`.
pub async fn start_on_demand(
    client: &Client,
    deployment_id: &str,
    target_dir: &Path,
    options: PollOptions,
) -> Result<StartOutcome> {
    let recipe = client.start_backup(deployment_id).await?;
    tracing::info!(recipe_id = %recipe.id, %deployment_id, "on-demand backup triggered");

    println!("Recipe Id: {}", recipe.id);
    println!("Status:    {}", recipe.status);
    println!();

    let recipe = wait_for_recipe(client, &recipe, &options).await?;

    let backups = client.list_backups(&recipe.deployment_id).await?;
    let Some(candidate) = find_on_demand(&backups) else {
        println!("No on demand backup found");
        return Ok(StartOutcome::NoOnDemandFound);
    };

    // Re-read the record by id: the list entry may predate the download
    // link being attached.
    let backup = client
        .get_backup(&candidate.deployment_id, &candidate.id)
        .await?;
    let path = download::download_archive(client, &backup, target_dir).await?;
    Ok(StartOutcome::Downloaded(path))
}

/// Poll the recipe on a fixed interval until its status is complete.
///
/// One progress dot per pending poll, a newline once the recipe completes.
async fn wait_for_recipe(client: &Client, recipe: &Recipe, options: &PollOptions) -> Result<Recipe> {
    loop {
        let recipe = client.get_recipe(&recipe.id).await?;
        if recipe.is_complete() {
            println!();
            return Ok(recipe);
        }

        print!(".");
        io::stdout().flush()?;
        tokio::time::sleep(options.interval).await;
    }
}

/// First on-demand backup in provider-returned order, if any.
pub fn find_on_demand(backups: &[Backup]) -> Option<&Backup> {
    backups.iter().find(|backup| backup.is_on_demand())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup(id: &str, kind: &str) -> Backup {
        Backup {
            id: id.to_string(),
            deployment_id: "dep-1".to_string(),
            kind: kind.to_string(),
            status: "complete".to_string(),
            name: format!("{id}-name"),
            download_link: None,
        }
    }

    #[test]
    fn first_on_demand_entry_wins() {
        let backups = vec![
            backup("bkp-1", "scheduled"),
            backup("bkp-2", "on_demand"),
            backup("bkp-3", "on_demand"),
        ];

        let found = find_on_demand(&backups).unwrap();
        assert_eq!(found.id, "bkp-2");
    }

    #[test]
    fn no_on_demand_entry_yields_none() {
        let backups = vec![backup("bkp-1", "scheduled"), backup("bkp-2", "scheduled")];
        assert!(find_on_demand(&backups).is_none());

        assert!(find_on_demand(&[]).is_none());
    }
}
