//! Route 53 live integration test
//!
//! Operation mode:
//! ```bash
//! AWS_ACCESS_KEY_ID=xxx AWS_SECRET_ACCESS_KEY=xxx ROUTE53_TEST_ZONE_ID=Zxxx \
//!     cargo test -p dns-maintenance-route53 --test route53_test -- --ignored --nocapture
//! ```
//!
//! Read-only: every test lists records, nothing mutates the zone.

mod common;

use common::{TestContext, client_from_env};
use dns_maintenance_route53::{Route53Error, ZoneRecordStore};

// ============ Listing ============

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and ROUTE53_TEST_ZONE_ID"]
async fn test_route53_list_first_page() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "ROUTE53_TEST_ZONE_ID"
    );

    let ctx = require_some!(TestContext::route53(), "failed to build test context");
    let page = require_ok!(
        ctx.client.list_record_sets(&ctx.zone_id, None).await,
        "list_record_sets failed"
    );

    // Every hosted zone carries at least its SOA and NS sets.
    assert!(!page.record_sets.is_empty(), "zone should not be empty");

    println!("✓ first page holds {} record sets", page.record_sets.len());
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and ROUTE53_TEST_ZONE_ID"]
async fn test_route53_walk_whole_zone() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "ROUTE53_TEST_ZONE_ID"
    );

    let ctx = require_some!(TestContext::route53(), "failed to build test context");

    let mut cursor = None;
    let mut total = 0usize;
    let mut pages = 0u32;

    loop {
        let page = require_ok!(
            ctx.client
                .list_record_sets(&ctx.zone_id, cursor.as_ref())
                .await,
            "list_record_sets failed on page {pages}"
        );
        total += page.record_sets.len();
        pages += 1;
        assert!(pages <= 100, "pagination did not terminate");

        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    assert!(total > 0, "zone should not be empty");
    println!("✓ walked {pages} page(s), {total} record sets");
}

// ============ Error Mapping ============

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY"]
async fn test_route53_unknown_zone_maps_to_zone_not_found() {
    skip_if_no_credentials!("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY");

    let client = require_some!(client_from_env(), "failed to build client");

    // Well-formed id that no account owns.
    let res = client
        .list_record_sets("Z0000000000000000000", None)
        .await;
    match res {
        Err(Route53Error::ZoneNotFound { zone_id, .. }) => {
            assert_eq!(zone_id, "Z0000000000000000000");
            println!("✓ NoSuchHostedZone mapped to ZoneNotFound");
        }
        other => panic!("expected ZoneNotFound, got {other:?}"),
    }
}
