use serde::{Deserialize, Serialize};

/// Unified error type for Route 53 operations.
///
/// Every failure in this crate (credential resolution, signing, transport,
/// API rejection, response decoding) collapses into one of these variants.
/// All variants are serializable for structured error reporting. The calling
/// tool treats every error as fatal; there is no retry layer behind this
/// type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum Route53Error {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, bad gateway, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// Route 53 rejected the request signature or token.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The shared credentials file does not exist.
    CredentialsFileNotFound {
        /// Path that was probed.
        path: String,
    },

    /// The shared credentials file has no section for the requested profile.
    ProfileNotFound {
        /// Profile that was requested.
        profile: String,
        /// File that was searched.
        path: String,
    },

    /// A required key is absent from the profile section.
    MissingCredentialKey {
        /// Profile being resolved.
        profile: String,
        /// Key that is missing (e.g. `aws_secret_access_key`).
        key: String,
    },

    /// A required key is present but blank.
    EmptyCredentialKey {
        /// Profile being resolved.
        profile: String,
        /// Key that is empty.
        key: String,
    },

    /// The authenticated principal lacks permission for the operation.
    AccessDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone does not exist (or is not visible to this account).
    ZoneNotFound {
        /// Zone id that was requested.
        zone_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429, `Throttling`, or a
    /// prior change still in flight).
    RateLimited {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Route 53 rejected the change batch, usually with one message per
    /// offending change.
    InvalidChangeBatch {
        /// Rejection messages as returned by the API.
        messages: Vec<String>,
    },

    /// A request parameter is invalid (bad zone id syntax, malformed cursor,
    /// etc.).
    InvalidInput {
        /// Error details.
        detail: String,
    },

    /// An unrecognized error from the API.
    ///
    /// Catch-all for error codes not mapped to a specific variant; carries
    /// the literal code and message.
    ApiError {
        /// Raw error code from the API.
        #[serde(rename = "raw_code")]
        code: String,
        /// Raw error message from the API.
        raw_message: String,
    },

    /// Failed to parse an API response document.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl Route53Error {
    /// Whether this is an expected failure (operator-fixable input, missing
    /// resources), used for log leveling.
    ///
    /// `true` should log at `warn` level, `false` at `error` level.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::CredentialsFileNotFound { .. }
                | Self::ProfileNotFound { .. }
                | Self::MissingCredentialKey { .. }
                | Self::EmptyCredentialKey { .. }
                | Self::AccessDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidInput { .. }
        )
    }

    /// Stable error code string, matching the serde tag.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NetworkError { .. } => "NetworkError",
            Self::Timeout { .. } => "Timeout",
            Self::InvalidCredentials { .. } => "InvalidCredentials",
            Self::CredentialsFileNotFound { .. } => "CredentialsFileNotFound",
            Self::ProfileNotFound { .. } => "ProfileNotFound",
            Self::MissingCredentialKey { .. } => "MissingCredentialKey",
            Self::EmptyCredentialKey { .. } => "EmptyCredentialKey",
            Self::AccessDenied { .. } => "AccessDenied",
            Self::ZoneNotFound { .. } => "ZoneNotFound",
            Self::RateLimited { .. } => "RateLimited",
            Self::InvalidChangeBatch { .. } => "InvalidChangeBatch",
            Self::InvalidInput { .. } => "InvalidInput",
            Self::ApiError { .. } => "ApiError",
            Self::ParseError { .. } => "ParseError",
            Self::SerializationError { .. } => "SerializationError",
        }
    }
}

impl std::fmt::Display for Route53Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::CredentialsFileNotFound { path } => {
                write!(f, "Credentials file '{path}' not found")
            }
            Self::ProfileNotFound { profile, path } => {
                write!(f, "Profile '{profile}' not found in '{path}'")
            }
            Self::MissingCredentialKey { profile, key } => {
                write!(f, "Profile '{profile}' is missing '{key}'")
            }
            Self::EmptyCredentialKey { profile, key } => {
                write!(f, "Profile '{profile}' has an empty '{key}'")
            }
            Self::AccessDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Access denied: {msg}")
                } else {
                    write!(f, "Access denied")
                }
            }
            Self::ZoneNotFound {
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Hosted zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "Hosted zone '{zone_id}' not found")
                }
            }
            Self::RateLimited { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Rate limited: {msg}")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::InvalidChangeBatch { messages } => {
                write!(f, "Invalid change batch: {}", messages.join("; "))
            }
            Self::InvalidInput { detail } => {
                write!(f, "Invalid input: {detail}")
            }
            Self::ApiError { code, raw_message } => {
                write!(f, "{code}: {raw_message}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for Route53Error {}

/// Convenience type alias for `Result<T, Route53Error>`.
pub type Result<T> = std::result::Result<T, Route53Error>;

#[cfg(test)]
mod tests {
    use super::*;

    // ============ Display ============

    #[test]
    fn display_network_error() {
        let e = Route53Error::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = Route53Error::Timeout {
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "Request timeout: 30s elapsed");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = Route53Error::InvalidCredentials {
            raw_message: Some("signature expired".to_string()),
        };
        assert_eq!(e.to_string(), "Invalid credentials: signature expired");
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = Route53Error::InvalidCredentials { raw_message: None };
        assert_eq!(e.to_string(), "Invalid credentials");
    }

    #[test]
    fn display_profile_not_found() {
        let e = Route53Error::ProfileNotFound {
            profile: "staging".to_string(),
            path: "/home/op/.aws/credentials".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Profile 'staging' not found in '/home/op/.aws/credentials'"
        );
    }

    #[test]
    fn display_missing_credential_key() {
        let e = Route53Error::MissingCredentialKey {
            profile: "dev".to_string(),
            key: "aws_secret_access_key".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Profile 'dev' is missing 'aws_secret_access_key'"
        );
    }

    #[test]
    fn display_zone_not_found() {
        let e = Route53Error::ZoneNotFound {
            zone_id: "Z0412013MV7E9PJ2K1Q8".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "Hosted zone 'Z0412013MV7E9PJ2K1Q8' not found");
    }

    #[test]
    fn display_invalid_change_batch_joins_messages() {
        let e = Route53Error::InvalidChangeBatch {
            messages: vec![
                "Weight cannot exceed 255".to_string(),
                "Duplicate Set Identifier".to_string(),
            ],
        };
        assert_eq!(
            e.to_string(),
            "Invalid change batch: Weight cannot exceed 255; Duplicate Set Identifier"
        );
    }

    #[test]
    fn display_api_error_is_code_and_message() {
        let e = Route53Error::ApiError {
            code: "ServiceUnavailable".to_string(),
            raw_message: "try again".to_string(),
        };
        assert_eq!(e.to_string(), "ServiceUnavailable: try again");
    }

    // ============ Classification ============

    #[test]
    fn operator_errors_are_expected() {
        let expected = [
            Route53Error::InvalidCredentials { raw_message: None },
            Route53Error::ProfileNotFound {
                profile: "qa".to_string(),
                path: "x".to_string(),
            },
            Route53Error::ZoneNotFound {
                zone_id: "Z1".to_string(),
                raw_message: None,
            },
            Route53Error::InvalidChangeBatch { messages: vec![] },
        ];
        for e in expected {
            assert!(e.is_expected(), "{e} should be expected");
        }
    }

    #[test]
    fn transport_errors_are_unexpected() {
        let unexpected = [
            Route53Error::NetworkError {
                detail: "x".to_string(),
            },
            Route53Error::Timeout {
                detail: "x".to_string(),
            },
            Route53Error::RateLimited { raw_message: None },
            Route53Error::ParseError {
                detail: "x".to_string(),
            },
        ];
        for e in unexpected {
            assert!(!e.is_expected(), "{e} should be unexpected");
        }
    }

    // ============ Serde ============

    #[test]
    fn serializes_with_code_tag() {
        let e = Route53Error::ZoneNotFound {
            zone_id: "Z0412013MV7E9PJ2K1Q8".to_string(),
            raw_message: None,
        };
        let json_res = serde_json::to_value(&e);
        assert!(json_res.is_ok(), "expected Ok(..), got {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json["code"], "ZoneNotFound");
        assert_eq!(json["zone_id"], "Z0412013MV7E9PJ2K1Q8");
    }

    #[test]
    fn code_matches_serde_tag() {
        let e = Route53Error::RateLimited { raw_message: None };
        let json_res = serde_json::to_value(&e);
        assert!(json_res.is_ok(), "expected Ok(..), got {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json["code"], e.code());
    }

    #[test]
    fn round_trips_through_json() {
        let e = Route53Error::InvalidChangeBatch {
            messages: vec!["bad weight".to_string()],
        };
        let json_res = serde_json::to_string(&e);
        assert!(json_res.is_ok(), "expected Ok(..), got {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        let back_res = serde_json::from_str::<Route53Error>(&json);
        assert!(back_res.is_ok(), "expected Ok(..), got {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        match back {
            Route53Error::InvalidChangeBatch { messages } => {
                assert_eq!(messages, vec!["bad weight".to_string()]);
            }
            other => panic!("expected InvalidChangeBatch, got {other:?}"),
        }
    }
}
