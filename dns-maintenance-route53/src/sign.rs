//! AWS Signature Version 4 signing

use std::fmt::Write;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

pub(crate) fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Credential material plus the (region, service) pair that scopes the
/// derived signing key.
///
/// Route 53 is a global service: the client always scopes to
/// `us-east-1`/`route53`. The pair stays parameterized so the derivation can
/// be checked against worked examples for other services.
#[derive(Debug, Clone)]
pub(crate) struct SigV4Signer {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub service: String,
}

impl SigV4Signer {
    /// Generate the `Authorization` header value for one request.
    ///
    /// Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html>
    ///
    /// `headers` must already contain every header to be signed (`host`,
    /// `x-amz-date`, and `x-amz-security-token` when a session token is in
    /// play). `query` must be URI-encoded by the caller; `uri` must be a
    /// path of unreserved characters (true for every Route 53 route this
    /// crate calls). `timestamp` is `%Y%m%dT%H%M%SZ`.
    pub(crate) fn sign(
        &self,
        method: &str,
        uri: &str,
        query: &str,
        headers: &[(String, String)],
        payload: &str,
        timestamp: &str,
    ) -> String {
        // 1. Canonical URI: passed through as-is (see contract above)
        let canonical_uri = uri;

        // 2. Query string sorting (ascending by encoded parameter)
        let canonical_query = if query.is_empty() {
            String::new()
        } else {
            let mut params: Vec<&str> = query.split('&').collect();
            params.sort_unstable();
            params.join("&")
        };

        // 3. Canonical headers: lowercase keys, trimmed values, sorted
        let mut sorted_headers: Vec<_> = headers.iter().collect();
        sorted_headers.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));

        let canonical_headers: String =
            sorted_headers
                .iter()
                .fold(String::new(), |mut acc, (k, v)| {
                    let _ = writeln!(acc, "{}:{}", k.to_lowercase(), v.trim());
                    acc
                });

        let signed_headers: String = sorted_headers
            .iter()
            .map(|(k, _)| k.to_lowercase())
            .collect::<Vec<_>>()
            .join(";");

        // 4. Payload hash
        let hashed_payload = hex::encode(Sha256::digest(payload.as_bytes()));

        // 5. Canonical request
        let canonical_request = format!(
            "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}"
        );

        log::debug!("CanonicalRequest:\n{canonical_request}");

        // 6. String to sign (4-line format with credential scope)
        let date = timestamp.get(..8).unwrap_or(timestamp);
        let credential_scope = format!(
            "{date}/{}/{}/aws4_request",
            self.region, self.service
        );
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{timestamp}\n{credential_scope}\n{hashed_canonical_request}"
        );

        log::debug!("StringToSign:\n{string_to_sign}");

        // 7. Derived signing key, then the signature
        let secret_date = hmac_sha256(
            format!("AWS4{}", self.secret_access_key).as_bytes(),
            date.as_bytes(),
        );
        let secret_region = hmac_sha256(&secret_date, self.region.as_bytes());
        let secret_service = hmac_sha256(&secret_region, self.service.as_bytes());
        let secret_signing = hmac_sha256(&secret_service, b"aws4_request");
        let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

        // 8. Authorization header
        format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            self.access_key_id, credential_scope, signed_headers, signature
        )
    }
}
