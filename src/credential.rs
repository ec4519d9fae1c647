use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{ProvisionError, Result};

/// A Label Studio access token. Only ever held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Trims `raw` and rejects it when nothing is left.
    pub fn new(raw: &str) -> Option<Credential> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Credential(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Source of interactive answers when no key is configured.
pub trait Prompt {
    /// Shows `notice` followed by `question` and returns the answer line.
    fn ask(&mut self, notice: &str, question: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads the answer from stdin. End of input reads as an empty answer.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, notice: &str, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{notice}{question}")?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

pub const API_KEY_QUESTION: &str = "\nEnter your API key: ";

pub fn missing_key_notice(host_name: &str) -> String {
    format!(
        "\nNo API key found in environment.\n\
         Please get your API key from Label Studio:\n\
         1. Visit {host_name}\n\
         2. Go to Account & Settings > Access Token\n"
    )
}

/// Uses `preset` when it holds a non-blank key, otherwise asks `prompt` once.
pub fn resolve_credential(
    preset: Option<&str>,
    host_name: &str,
    prompt: &mut dyn Prompt,
) -> Result<Credential> {
    if let Some(credential) = preset.and_then(Credential::new) {
        debug!("using API key from environment");
        return Ok(credential);
    }
    let answer = prompt
        .ask(&missing_key_notice(host_name), API_KEY_QUESTION)
        .map_err(ProvisionError::Prompt)?;
    Credential::new(&answer).ok_or(ProvisionError::MissingCredential)
}
