use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("OpenAI key file not found at {path}")]
    KeyFileMissing { path: PathBuf },

    #[error("failed to read OpenAI key file {path}: {source}")]
    KeyFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot locate home directory for the OpenAI key file")]
    NoHomeDir,
}

/// Where the API key comes from.
#[derive(Debug, Clone)]
pub enum ApiKeySource {
    Static(String),
    /// Environment variable first, then a key file.
    EnvOrFile { var: String, path: PathBuf },
}

impl ApiKeySource {
    /// `$OPENAI_API_KEY`, falling back to `~/.openai/key.txt`.
    pub fn default_openai() -> Result<Self, CredentialError> {
        Ok(Self::EnvOrFile {
            var: DEFAULT_KEY_VAR.to_string(),
            path: default_key_path()?,
        })
    }

    pub fn resolve(&self) -> Result<String, CredentialError> {
        match self {
            Self::Static(key) => Ok(key.clone()),
            Self::EnvOrFile { var, path } => {
                if let Ok(key) = std::env::var(var) {
                    return Ok(key);
                }
                read_key_file(path)
            }
        }
    }
}

fn default_key_path() -> Result<PathBuf, CredentialError> {
    let home = std::env::var_os("HOME").ok_or(CredentialError::NoHomeDir)?;
    Ok(PathBuf::from(home).join(".openai").join("key.txt"))
}

fn read_key_file(path: &Path) -> Result<String, CredentialError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(raw.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CredentialError::KeyFileMissing { path: path.to_path_buf() })
        }
        Err(source) => Err(CredentialError::KeyFileUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
