//! Provisions a Label Studio project for annotating multi-turn dialogue transcripts
//! against a fixed taxonomy.

use clap::Parser;

pub mod client;
pub mod credential;
pub mod error;
pub mod provision;
pub mod taxonomy;

pub use client::{LabelStudioClient, ProjectApi, ProjectId};
pub use credential::{resolve_credential, Credential, Prompt, StdinPrompt};
pub use error::{ProvisionError, RemoteError, Result};
pub use provision::{create_project, run, PROJECT_TITLE};
pub use taxonomy::{Choice, LabelConfig, DIALOGUE_TAXONOMY, TAXONOMY};

pub const HOST_NAME_ENV_VAR_NAME: &str = "LABEL_STUDIO_URL";
pub const API_KEY_ENV_VAR_NAME: &str = "LABEL_STUDIO_API_KEY";
pub const DEFAULT_HOST_NAME: &str = "http://localhost:8080";

#[derive(Parser, Debug)]
#[command(
    name = "create-project",
    version,
    about = "Create the DUP taxonomy annotation project in Label Studio"
)]
pub struct Config {
    /// Label Studio base URL
    #[arg(long = "url", env = HOST_NAME_ENV_VAR_NAME, default_value = DEFAULT_HOST_NAME)]
    pub host_name: String,

    /// Access token from Account & Settings; prompted for when unset
    #[arg(long, env = API_KEY_ENV_VAR_NAME, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print the label config and exit without contacting Label Studio
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}

impl Config {
    /// Loads `.env` if present, then parses flags and environment.
    pub fn build() -> Config {
        let _ = dotenvy::dotenv();
        Config::parse().normalized()
    }

    fn normalized(mut self) -> Config {
        self.host_name = self.host_name.trim_end_matches('/').to_string();
        self
    }
}
