use anyhow::Result;

use backstop_client::{download, Client};

pub async fn execute(client: &Client, deployment_id: &str, backup_id: &str) -> Result<()> {
    let backup = client.get_backup(deployment_id, backup_id).await?;

    // A missing download link propagates as an error and exits non-zero
    // before any archive fetch.
    let target_dir = std::env::current_dir()?;
    download::download_archive(client, &backup, &target_dir).await?;
    Ok(())
}
