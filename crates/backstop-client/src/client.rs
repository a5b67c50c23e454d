use bytes::Bytes;
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use backstop_models::{
    Backup, Deployment, ListBackupsResponse, ListDeploymentsResponse, Recipe,
};

use crate::error::{Error, Result};

/// Connection settings resolved once at startup and passed in explicitly.
///
/// The token is sent as-is; an empty token is not rejected locally, the
/// provider's authorization error comes back like any other failure.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub token: String,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            token: token.into(),
        }
    }
}

#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// List all deployments, in provider-returned order.
    pub async fn list_deployments(&self) -> Result<Vec<Deployment>> {
        let response: ListDeploymentsResponse = self.get("/deployments/").await?;
        Ok(response.into_deployments())
    }

    /// List backups for a deployment, in provider-returned order.
    pub async fn list_backups(&self, deployment_id: &str) -> Result<Vec<Backup>> {
        let path = format!("/deployments/{}/backups", deployment_id);
        let response: ListBackupsResponse = self.get(&path).await?;
        Ok(response.into_backups())
    }

    /// Get a specific backup.
    pub async fn get_backup(&self, deployment_id: &str, backup_id: &str) -> Result<Backup> {
        let path = format!("/deployments/{}/backups/{}", deployment_id, backup_id);
        self.get(&path).await
    }

    /// Get a specific backup as the raw provider document.
    pub async fn get_backup_raw(&self, deployment_id: &str, backup_id: &str) -> Result<Value> {
        let path = format!("/deployments/{}/backups/{}", deployment_id, backup_id);
        self.get(&path).await
    }

    /// Trigger an on-demand backup. The provider answers with a recipe
    /// tracking the asynchronous job, not with the backup itself.
    pub async fn start_backup(&self, deployment_id: &str) -> Result<Recipe> {
        let path = format!("/deployments/{}/backups", deployment_id);
        self.post(&path).await
    }

    /// Poll a recipe's status.
    pub async fn get_recipe(&self, recipe_id: &str) -> Result<Recipe> {
        let path = format!("/recipes/{}", recipe_id);
        self.get(&path).await
    }

    /// Fetch a backup archive from its download link.
    ///
    /// The link is an absolute, time-limited URL; no authorization header is
    /// attached. Returns the response with the body unread so the caller can
    /// stream it.
    pub async fn fetch_archive(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!(%url, "fetching archive");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::POST, path).await
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let (status, body) = self.send(method, path).await?;

        if !status.is_success() {
            return Err(Error::Api {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn send(&self, method: Method, path: &str) -> Result<(StatusCode, Bytes)> {
        let url = format!("{}{}", self.config.api_base, path);
        tracing::debug!(%method, %url, "API request");

        let response = self
            .http
            .request(method, &url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.config.token),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body))
    }
}
