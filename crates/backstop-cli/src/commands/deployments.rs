use anyhow::Result;

use crate::format;
use backstop_client::Client;

pub async fn execute(client: &Client) -> Result<()> {
    let deployments = client.list_deployments().await?;
    format::print_deployments(&deployments);
    Ok(())
}
