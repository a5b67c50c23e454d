use anyhow::Result;

use crate::format;
use backstop_client::Client;

pub async fn execute(client: &Client, deployment_id: &str) -> Result<()> {
    let backups = client.list_backups(deployment_id).await?;
    format::print_backup_list(&backups);
    Ok(())
}
