use anyhow::Result;

use backstop_client::orchestrate::{self, PollOptions, StartOutcome};
use backstop_client::Client;

pub async fn execute(client: &Client, deployment_id: &str) -> Result<()> {
    let target_dir = std::env::current_dir()?;
    let outcome =
        orchestrate::start_on_demand(client, deployment_id, &target_dir, PollOptions::default())
            .await?;

    if let StartOutcome::Downloaded(path) = outcome {
        tracing::info!(path = %path.display(), "on-demand backup downloaded");
    }

    Ok(())
}
