//! Wire types for the provider's backup API.
//!
//! List endpoints wrap their payload in an `_embedded` envelope; single
//! resources are returned bare. All fields are provider-defined strings and
//! are passed through untouched.

use serde::{Deserialize, Serialize};

/// Backup type the provider assigns to user-triggered backups.
pub const BACKUP_TYPE_ON_DEMAND: &str = "on_demand";

/// Terminal recipe status.
pub const RECIPE_STATUS_COMPLETE: &str = "complete";

/// A provisioned database instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// A point-in-time snapshot of a deployment.
///
/// `download_link` is only present once the backup has been finalized and is
/// retrievable; the provider omits or nulls it otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub id: String,
    pub deployment_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub name: String,
    #[serde(default)]
    pub download_link: Option<String>,
}

impl Backup {
    pub fn is_on_demand(&self) -> bool {
        self.kind == BACKUP_TYPE_ON_DEMAND
    }
}

/// The provider's asynchronous job handle.
///
/// A recipe transitions from pending statuses to `complete`; this tool only
/// observes the transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub status: String,
    pub deployment_id: String,
}

impl Recipe {
    pub fn is_complete(&self) -> bool {
        self.status == RECIPE_STATUS_COMPLETE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDeploymentsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: DeploymentsEmbedded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentsEmbedded {
    pub deployments: Vec<Deployment>,
}

impl ListDeploymentsResponse {
    pub fn into_deployments(self) -> Vec<Deployment> {
        self.embedded.deployments
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBackupsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: BackupsEmbedded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupsEmbedded {
    pub backups: Vec<Backup>,
}

impl ListBackupsResponse {
    pub fn into_backups(self) -> Vec<Backup> {
        self.embedded.backups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_list_envelope_decodes_in_order() {
        let json = r#"{
            "_embedded": {
                "deployments": [
                    {"id": "dep-1", "type": "postgresql", "name": "prod-db"},
                    {"id": "dep-2", "type": "redis", "name": "cache"}
                ]
            }
        }"#;

        let response: ListDeploymentsResponse = serde_json::from_str(json).unwrap();
        let deployments = response.into_deployments();
        assert_eq!(deployments.len(), 2);
        assert_eq!(deployments[0].id, "dep-1");
        assert_eq!(deployments[0].kind, "postgresql");
        assert_eq!(deployments[1].name, "cache");
    }

    #[test]
    fn missing_envelope_is_a_decode_error() {
        let json = r#"{"errors": {"error": "invalid token"}}"#;
        let result: Result<ListDeploymentsResponse, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn backup_without_download_link_decodes_to_none() {
        let json = r#"{
            "id": "bkp-1",
            "deployment_id": "dep-1",
            "type": "scheduled",
            "status": "complete",
            "name": "prod-db_2016-08-01",
            "download_link": null
        }"#;

        let backup: Backup = serde_json::from_str(json).unwrap();
        assert!(backup.download_link.is_none());
        assert!(!backup.is_on_demand());

        // Field absent entirely is also fine.
        let json = r#"{
            "id": "bkp-1",
            "deployment_id": "dep-1",
            "type": "on_demand",
            "status": "running",
            "name": "prod-db_2016-08-01"
        }"#;
        let backup: Backup = serde_json::from_str(json).unwrap();
        assert!(backup.download_link.is_none());
        assert!(backup.is_on_demand());
    }

    #[test]
    fn backup_serializes_provider_field_names() {
        let backup = Backup {
            id: "bkp-1".to_string(),
            deployment_id: "dep-1".to_string(),
            kind: "on_demand".to_string(),
            status: "complete".to_string(),
            name: "prod-db_2016-08-01".to_string(),
            download_link: Some("https://example.com/archive".to_string()),
        };

        let value = serde_json::to_value(&backup).unwrap();
        assert_eq!(value["type"], "on_demand");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn recipe_completion() {
        let pending: Recipe = serde_json::from_str(
            r#"{"id": "rcp-1", "status": "running", "deployment_id": "dep-1"}"#,
        )
        .unwrap();
        assert!(!pending.is_complete());

        let complete: Recipe = serde_json::from_str(
            r#"{"id": "rcp-1", "status": "complete", "deployment_id": "dep-1"}"#,
        )
        .unwrap();
        assert!(complete.is_complete());
    }
}
