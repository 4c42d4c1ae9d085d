use crate::{CliClientResult, ClientError};

use pt_core::{ProjectDraft, ProjectDto};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the pt-server REST API. No automatic retry: a failed
/// call surfaces to the caller, who retries manually.
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5001")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request, decoding error bodies into ClientError::Api
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let location = ErrorLocation::from(Location::caller());

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let error = &body["error"];
            return Err(ClientError::Api {
                code: error["code"].as_str().unwrap_or("UNKNOWN").to_string(),
                message: error["message"]
                    .as_str()
                    .unwrap_or(status.as_str())
                    .to_string(),
                field: error["field"].as_str().map(String::from),
                location,
            });
        }

        Ok(response.json().await?)
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects, newest first
    pub async fn list_projects(&self) -> CliClientResult<Vec<ProjectDto>> {
        let req = self.request(Method::GET, "/projects");
        self.execute(req).await
    }

    /// Get a project by ID
    pub async fn get_project(&self, id: &str) -> CliClientResult<ProjectDto> {
        let req = self.request(Method::GET, &format!("/projects/{}", id));
        self.execute(req).await
    }

    /// Create a new project from the full field set
    pub async fn create_project(&self, draft: &ProjectDraft) -> CliClientResult<ProjectDto> {
        let req = self.request(Method::POST, "/projects").json(draft);
        self.execute(req).await
    }

    /// Replace a project's mutable fields (always the full field set)
    pub async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
    ) -> CliClientResult<ProjectDto> {
        let req = self
            .request(Method::PUT, &format!("/projects/{}", id))
            .json(draft);
        self.execute(req).await
    }

    /// Delete a project; the response is its prior state
    pub async fn delete_project(&self, id: &str) -> CliClientResult<ProjectDto> {
        let req = self.request(Method::DELETE, &format!("/projects/{}", id));
        self.execute(req).await
    }

    /// Server health document
    pub async fn health(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/health");
        self.execute(req).await
    }
}
