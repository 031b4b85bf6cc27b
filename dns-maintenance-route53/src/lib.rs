//! # dns-maintenance-route53
//!
//! A minimal Amazon Route 53 client for weighted alias record maintenance.
//!
//! Talks the 2013-04-01 REST/XML API directly with hand-rolled SigV4
//! signing. No AWS SDK, no retries, no zone management: just
//! `ListResourceRecordSets` pagination and atomic `ChangeResourceRecordSets`
//! batches, which is everything a traffic-flip tool needs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_maintenance_route53::{Route53Client, ZoneRecordStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Resolve credentials (environment first, then ~/.aws/credentials)
//!     let client = Route53Client::from_profile("production")?;
//!
//!     // 2. Walk the zone page by page
//!     let mut cursor = None;
//!     loop {
//!         let page = client
//!             .list_record_sets("Z0253498YFKJ6RLA4C7M", cursor.as_ref())
//!             .await?;
//!         for record in &page.record_sets {
//!             println!("{} {}", record.name, record.record_type);
//!         }
//!         match page.next {
//!             Some(next) => cursor = Some(next),
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Route53Error>`](Route53Error). The
//! variants mirror the API error codes a caller can act on:
//!
//! - [`Route53Error::InvalidCredentials`] — the signature or token was rejected
//! - [`Route53Error::ZoneNotFound`] — the hosted zone id does not exist
//! - [`Route53Error::InvalidChangeBatch`] — Route 53 rejected the batch, with
//!   its per-change messages
//! - [`Route53Error::RateLimited`] — throttled by the API
//!
//! Nothing is retried. Transient failures ([`Route53Error::NetworkError`],
//! [`Route53Error::Timeout`], [`Route53Error::RateLimited`]) surface
//! immediately and the caller decides what to do with them.
//!
//! ## Credential Resolution
//!
//! [`AwsCredentials::resolve`] checks `AWS_ACCESS_KEY_ID` /
//! `AWS_SECRET_ACCESS_KEY` (plus optional `AWS_SESSION_TOKEN`) before falling
//! back to the named profile in `$AWS_SHARED_CREDENTIALS_FILE` or
//! `~/.aws/credentials`.

mod client;
mod credentials;
mod error;
mod http;
mod sign;
mod traits;
mod types;
mod xml;

// Re-export error types
pub use error::{Result, Route53Error};

// Re-export the storage seam and its concrete client
pub use client::Route53Client;
pub use traits::ZoneRecordStore;

// Re-export credential resolution
pub use credentials::AwsCredentials;

// Re-export record set and change batch types
pub use types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, Changes, PageCursor,
    RecordSetPage, ResourceRecord, ResourceRecordSet, ResourceRecords, RrType,
};
