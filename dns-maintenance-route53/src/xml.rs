//! Route 53 XML wire documents
//!
//! The API speaks `2013-04-01` REST/XML. Wire structs mirror the element
//! names exactly; the public model in [`crate::types`] doubles as the
//! payload layer, so only the envelopes live here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, Route53Error};
use crate::types::{ChangeBatch, ChangeInfo, PageCursor, RecordSetPage, ResourceRecordSet, RrType};

/// Namespace stamped on every request document.
pub(crate) const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";

/// Serialize a request document.
pub(crate) fn to_xml<T: Serialize>(value: &T) -> Result<String> {
    quick_xml::se::to_string(value).map_err(|e| Route53Error::SerializationError {
        detail: e.to_string(),
    })
}

/// Deserialize a response document.
pub(crate) fn from_xml<T: DeserializeOwned>(body: &str) -> Result<T> {
    quick_xml::de::from_str(body).map_err(|e| Route53Error::ParseError {
        detail: e.to_string(),
    })
}

// ============ ListResourceRecordSets ============

/// Wire wrapper for the `<ResourceRecordSets>` element list.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecordSetList {
    #[serde(rename = "ResourceRecordSet", default)]
    pub items: Vec<ResourceRecordSet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ListResourceRecordSetsResponse {
    #[serde(default)]
    pub resource_record_sets: RecordSetList,
    pub is_truncated: bool,
    #[serde(default)]
    pub next_record_name: Option<String>,
    #[serde(default)]
    pub next_record_type: Option<RrType>,
    #[serde(default)]
    pub next_record_identifier: Option<String>,
}

impl From<ListResourceRecordSetsResponse> for RecordSetPage {
    fn from(resp: ListResourceRecordSetsResponse) -> Self {
        let next = if resp.is_truncated {
            match (resp.next_record_name, resp.next_record_type) {
                (Some(record_name), Some(record_type)) => Some(PageCursor {
                    record_name,
                    record_type,
                    set_identifier: resp.next_record_identifier,
                }),
                _ => {
                    // Truncated response without a cursor cannot be resumed;
                    // treat the listing as complete rather than looping.
                    log::warn!("truncated listing without a continuation cursor");
                    None
                }
            }
        } else {
            None
        };
        Self {
            record_sets: resp.resource_record_sets.items,
            next,
        }
    }
}

// ============ ChangeResourceRecordSets ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ChangeResourceRecordSetsRequest {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    pub change_batch: ChangeBatch,
}

impl ChangeResourceRecordSetsRequest {
    pub(crate) fn new(change_batch: ChangeBatch) -> Self {
        Self {
            xmlns: ROUTE53_XMLNS,
            change_batch,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ChangeResourceRecordSetsResponse {
    pub change_info: ChangeInfo,
}

// ============ Error envelopes ============

/// Standard error envelope, `<ErrorResponse><Error>...`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ErrorDetail {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Wire wrapper for the `<Messages>` element list.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageList {
    #[serde(rename = "Message", default)]
    pub items: Vec<String>,
}

/// Batch rejections use their own envelope,
/// `<InvalidChangeBatch><Messages>...`, instead of the standard one.
///
/// `Messages` is deliberately required: the deserializer does not check the
/// root element name, so an all-default struct would match any XML document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InvalidChangeBatchResponse {
    pub messages: MessageList,
}
