use tracing::{debug, warn};

use crate::client::{LabelStudioClient, ProjectApi, ProjectId};
use crate::credential::{resolve_credential, Prompt};
use crate::error::{ProvisionError, RemoteError, Result};
use crate::taxonomy::{LabelConfig, DIALOGUE_TAXONOMY};
use crate::{Config, API_KEY_ENV_VAR_NAME};

pub const PROJECT_TITLE: &str = "DUP Taxonomy Annotation";

/// Submits one create-project request. No retries.
pub async fn create_project(
    api: &dyn ProjectApi,
    title: &str,
    label_config: &LabelConfig,
) -> Result<ProjectId> {
    let xml = label_config.to_xml();
    debug!(bytes = xml.len(), "rendered label config");
    match api.create_project(title, &xml).await {
        Ok(id) => Ok(id),
        Err(RemoteError::Unauthorized) => {
            warn!("API key rejected by Label Studio");
            Err(ProvisionError::InvalidCredential)
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolves the API key, creates the project and reports the outcome on stdout.
pub async fn run(config: &Config, prompt: &mut dyn Prompt) -> Result<ProjectId> {
    let credential = resolve_credential(config.api_key.as_deref(), &config.host_name, prompt)?;
    let client = LabelStudioClient::new(&config.host_name, credential.clone());
    println!("Connecting to Label Studio at {}...", client.host_name());

    println!("Creating new project: {PROJECT_TITLE}");
    let project_id = create_project(&client, PROJECT_TITLE, &DIALOGUE_TAXONOMY).await?;
    println!("Project created: {project_id}");

    println!(
        "\nTip: To skip this prompt next time, set your API key as an environment variable:"
    );
    println!("export {}={}", API_KEY_ENV_VAR_NAME, credential.expose());
    Ok(project_id)
}
