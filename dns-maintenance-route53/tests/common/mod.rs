//! Shared helpers for live Route 53 tests

#![allow(dead_code)]

use std::env;

use dns_maintenance_route53::{AwsCredentials, Route53Client};

/// Skip the test (early return) when an environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert an `Option` is `Some` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Live test context: a signed client plus the hosted zone under test.
pub struct TestContext {
    pub client: Route53Client,
    pub zone_id: String,
}

impl TestContext {
    /// Builds a context from environment credentials, or `None` when any
    /// required variable is missing.
    pub fn route53() -> Option<Self> {
        let client = client_from_env()?;
        let zone_id = env::var("ROUTE53_TEST_ZONE_ID").ok()?;
        Some(Self { client, zone_id })
    }
}

/// Client from `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`, with the
/// session token picked up when present. No zone id required.
pub fn client_from_env() -> Option<Route53Client> {
    let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok()?;
    let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY").ok()?;
    let session_token = env::var("AWS_SESSION_TOKEN").ok();

    Some(Route53Client::new(AwsCredentials {
        access_key_id,
        secret_access_key,
        session_token,
    }))
}
