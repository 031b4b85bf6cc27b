//! HTTP transport and API error mapping
//!
//! One send path for both operations: build the signed request, execute,
//! surface the body. Status interpretation lives in [`map_api_failure`] so
//! callers can attach the zone id to the resulting error. There is no retry
//! layer; every failure is final.

use reqwest::RequestBuilder;

use crate::error::{Result, Route53Error};
use crate::xml::{self, ErrorResponse, InvalidChangeBatchResponse};

/// Cap on wire-body bytes echoed into debug logs.
const LOG_BODY_LIMIT: usize = 512;

/// Truncate a wire body for logging.
///
/// Bodies on this API are XML and usually small; record values can still
/// blow past the limit (TXT blobs, long change batches).
pub(crate) fn truncate_body(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &s[..end], s.len())
}

/// Execute a fully built request and return `(status, body)`.
///
/// Transport failures map to [`Timeout`](Route53Error::Timeout) /
/// [`NetworkError`](Route53Error::NetworkError); rate limiting and gateway
/// errors are recognized here because their bodies are not worth parsing.
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    method_name: &str,
    url: &str,
) -> Result<(u16, String)> {
    log::debug!("{method_name} {url}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            Route53Error::Timeout {
                detail: e.to_string(),
            }
        } else {
            Route53Error::NetworkError {
                detail: e.to_string(),
            }
        }
    })?;

    let status = response.status().as_u16();
    log::debug!("Response Status: {status}");

    if status == 429 {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Rate limited (HTTP 429)");
        return Err(Route53Error::RateLimited {
            raw_message: Some(body),
        });
    }

    if matches!(status, 502..=504) {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Server error (HTTP {status})");
        return Err(Route53Error::NetworkError {
            detail: format!("HTTP {status}: {body}"),
        });
    }

    let response_text = response
        .text()
        .await
        .map_err(|e| Route53Error::NetworkError {
            detail: format!("Failed to read response body: {e}"),
        })?;

    log::debug!("Response Body: {}", truncate_body(&response_text));

    Ok((status, response_text))
}

/// Interpret a non-2xx response body.
///
/// Tries the standard `<ErrorResponse>` envelope first, then the
/// `<InvalidChangeBatch>` envelope, then falls back to the raw status and
/// body.
pub(crate) fn map_api_failure(status: u16, body: &str, zone_id: &str) -> Route53Error {
    if let Ok(resp) = xml::from_xml::<ErrorResponse>(body) {
        if let Some(request_id) = &resp.request_id {
            log::debug!("API error request id: {request_id}");
        }
        return map_error_code(&resp.error.code, resp.error.message, zone_id);
    }

    if let Ok(resp) = xml::from_xml::<InvalidChangeBatchResponse>(body) {
        return Route53Error::InvalidChangeBatch {
            messages: resp.messages.items,
        };
    }

    Route53Error::ApiError {
        code: format!("HTTP{status}"),
        raw_message: truncate_body(body),
    }
}

/// Map a Route 53 error code to a typed error.
pub(crate) fn map_error_code(
    code: &str,
    message: Option<String>,
    zone_id: &str,
) -> Route53Error {
    match code {
        // ---- signature or token rejected ----
        "InvalidSignature"
        | "SignatureDoesNotMatch"
        | "InvalidClientTokenId"
        | "UnrecognizedClientException"
        | "ExpiredToken"
        | "MissingAuthenticationToken" => Route53Error::InvalidCredentials {
            raw_message: message,
        },

        // ---- authenticated but not permitted ----
        "AccessDenied" | "AccessDeniedException" => Route53Error::AccessDenied {
            raw_message: message,
        },

        // ---- zone id does not resolve ----
        "NoSuchHostedZone" => Route53Error::ZoneNotFound {
            zone_id: zone_id.to_string(),
            raw_message: message,
        },

        // ---- throttled, including change serialization contention ----
        "Throttling" | "ThrottlingException" | "PriorRequestNotComplete" => {
            Route53Error::RateLimited {
                raw_message: message,
            }
        }

        // ---- batch failed validation ----
        "InvalidChangeBatch" => Route53Error::InvalidChangeBatch {
            messages: message.into_iter().collect(),
        },

        // ---- malformed request ----
        "InvalidInput" | "InvalidArgument" => Route53Error::InvalidInput {
            detail: message.unwrap_or_default(),
        },

        // ---- everything else, verbatim ----
        _ => Route53Error::ApiError {
            code: code.to_string(),
            raw_message: message.unwrap_or_default(),
        },
    }
}
