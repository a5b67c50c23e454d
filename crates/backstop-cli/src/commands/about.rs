use anyhow::Result;

use crate::format;
use backstop_client::Client;
use backstop_models::Backup;

pub async fn execute(client: &Client, deployment_id: &str, backup_id: &str) -> Result<()> {
    // Raw provider document first, then the formatted summary.
    let raw = client.get_backup_raw(deployment_id, backup_id).await?;
    let backup: Backup = serde_json::from_value(raw.clone())?;

    format::print_json(&raw);
    format::print_backup_details(&backup);
    Ok(())
}
