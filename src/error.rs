use std::process::ExitCode;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Failures of the single create-project request.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The service rejected the API key (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("API key is required")]
    MissingCredential,

    #[error("Invalid API key")]
    InvalidCredential,

    #[error("failed to read API key")]
    Prompt(#[source] std::io::Error),

    /// Anything the remote call reports besides an auth rejection, passed through as is.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub const EXIT_FAILURE: u8 = 1;
// clap exits with 2 on usage errors, so the credential outcomes start at 3.
pub const EXIT_MISSING_CREDENTIAL: u8 = 3;
pub const EXIT_INVALID_CREDENTIAL: u8 = 4;

impl ProvisionError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn exit_status(&self) -> u8 {
        match self {
            ProvisionError::MissingCredential => EXIT_MISSING_CREDENTIAL,
            ProvisionError::InvalidCredential => EXIT_INVALID_CREDENTIAL,
            ProvisionError::Prompt(_) | ProvisionError::Remote(_) => EXIT_FAILURE,
        }
    }

    /// True for the two credential outcomes that get a short message instead of an error chain.
    pub fn is_credential_failure(&self) -> bool {
        matches!(
            self,
            ProvisionError::MissingCredential | ProvisionError::InvalidCredential
        )
    }

    /// The message followed by every underlying cause, separated by `: `.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
