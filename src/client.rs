use async_trait::async_trait;
use reqwest::{header, StatusCode};
use tracing::{debug, info};

use crate::credential::Credential;
use crate::error::RemoteError;

pub type ProjectId = u32;

/// The one remote operation this tool needs.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    async fn create_project(
        &self,
        title: &str,
        label_config: &str,
    ) -> Result<ProjectId, RemoteError>;
}

#[derive(serde::Serialize)]
struct CreateProjectRequest<'a> {
    title: &'a str,
    label_config: &'a str,
}

#[derive(serde::Deserialize)]
struct CreatedProject {
    id: serde_json::Value,
}

pub struct LabelStudioClient {
    client: reqwest::Client,
    host_name: String,
    api_token: Credential,
}

impl LabelStudioClient {
    pub fn new(host_name: &str, api_token: Credential) -> LabelStudioClient {
        LabelStudioClient {
            client: reqwest::Client::new(),
            host_name: host_name.to_string(),
            api_token,
        }
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }
}

#[async_trait]
impl ProjectApi for LabelStudioClient {
    async fn create_project(
        &self,
        title: &str,
        label_config: &str,
    ) -> Result<ProjectId, RemoteError> {
        let query = format!("{}/api/projects/", self.host_name);
        let auth_header = format!("Token {}", self.api_token.expose());
        debug!(url = %query, title, "creating project");
        let response = self
            .client
            .post(query)
            .header(header::AUTHORIZATION, auth_header)
            .json(&CreateProjectRequest {
                title,
                label_config,
            })
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "create project response");
        if status == StatusCode::UNAUTHORIZED {
            return Err(RemoteError::Unauthorized);
        }
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: response.text().await?,
            });
        }

        let created = response
            .json::<CreatedProject>()
            .await
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;
        let Some(id) = created.id.as_u64().and_then(|id| ProjectId::try_from(id).ok()) else {
            return Err(RemoteError::MalformedResponse(format!(
                "expected project id to be a small integer, got {}",
                created.id
            )));
        };
        info!(project_id = id, "project created");
        Ok(id)
    }
}
