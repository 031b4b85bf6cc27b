//! AWS credential resolution
//!
//! Environment variables win; otherwise the profile section of the shared
//! credentials file is read. Only the INI subset that file actually uses is
//! parsed: section headers, `key = value` lines, `#`/`;` comments.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, Route53Error};

/// Key material for SigV4 signing.
#[derive(Debug, Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    /// STS session token, present for temporary credentials. Sent as
    /// `X-Amz-Security-Token` and included in the signature.
    pub session_token: Option<String>,
}

impl AwsCredentials {
    /// Resolve credentials for `profile`.
    ///
    /// Order: `AWS_ACCESS_KEY_ID` + `AWS_SECRET_ACCESS_KEY` (with optional
    /// `AWS_SESSION_TOKEN`) from the environment, then the profile section
    /// of `$AWS_SHARED_CREDENTIALS_FILE` or `~/.aws/credentials`.
    pub fn resolve(profile: &str) -> Result<Self> {
        if let Some(creds) = Self::from_env() {
            log::debug!("using credentials from environment");
            return Ok(creds);
        }

        let Some(path) = credentials_file_path() else {
            return Err(Route53Error::CredentialsFileNotFound {
                path: "~/.aws/credentials".to_string(),
            });
        };
        log::debug!(
            "resolving profile '{profile}' from {}",
            path.display()
        );
        Self::from_file(&path, profile)
    }

    /// Environment credentials, if both required variables are set and
    /// non-empty.
    fn from_env() -> Option<Self> {
        let access_key_id = std::env::var("AWS_ACCESS_KEY_ID")
            .ok()
            .filter(|v| !v.is_empty())?;
        let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY")
            .ok()
            .filter(|v| !v.is_empty())?;
        let session_token = std::env::var("AWS_SESSION_TOKEN")
            .ok()
            .filter(|v| !v.is_empty());
        Some(Self {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }

    /// Load the `profile` section of a shared credentials file.
    pub fn from_file(path: &Path, profile: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|_| Route53Error::CredentialsFileNotFound {
                path: path.display().to_string(),
            })?;
        Self::from_ini(&content, &path.display().to_string(), profile)
    }

    /// Parse one profile out of credentials-file content.
    fn from_ini(content: &str, path_label: &str, profile: &str) -> Result<Self> {
        let Some(section) = profile_section(content, profile) else {
            return Err(Route53Error::ProfileNotFound {
                profile: profile.to_string(),
                path: path_label.to_string(),
            });
        };

        let access_key_id = required_key(&section, profile, "aws_access_key_id")?;
        let secret_access_key = required_key(&section, profile, "aws_secret_access_key")?;
        let session_token = section
            .get("aws_session_token")
            .filter(|v| !v.is_empty())
            .cloned();

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }
}

/// `$AWS_SHARED_CREDENTIALS_FILE`, or `~/.aws/credentials`.
///
/// `None` only when the home directory cannot be determined.
fn credentials_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("AWS_SHARED_CREDENTIALS_FILE")
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".aws").join("credentials"))
}

/// Collect the `key = value` pairs of one `[profile]` section.
///
/// Keys are lowercased; values keep their case. Returns `None` when the
/// section header never appears.
fn profile_section(content: &str, profile: &str) -> Option<HashMap<String, String>> {
    let mut in_target = false;
    let mut found = false;
    let mut keys = HashMap::new();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            if in_target {
                // Target section just ended.
                break;
            }
            in_target = header.trim() == profile;
            found = found || in_target;
            continue;
        }
        if in_target
            && let Some((key, value)) = line.split_once('=')
        {
            keys.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    found.then_some(keys)
}

fn required_key(
    section: &HashMap<String, String>,
    profile: &str,
    key: &str,
) -> Result<String> {
    match section.get(key) {
        None => Err(Route53Error::MissingCredentialKey {
            profile: profile.to_string(),
            key: key.to_string(),
        }),
        Some(value) if value.is_empty() => Err(Route53Error::EmptyCredentialKey {
            profile: profile.to_string(),
            key: key.to_string(),
        }),
        Some(value) => Ok(value.clone()),
    }
}
