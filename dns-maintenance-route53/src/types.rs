use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record type identifier.
///
/// Covers the full set of types Route 53 can return when listing a hosted
/// zone, so that foreign records (`SOA`, `NS`, ...) deserialize cleanly even
/// though this crate only ever writes `A` records back.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"CNAME"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RrType {
    /// IPv4 address record (also the type carried by alias records).
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Start of authority record.
    Soa,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
    /// Pointer record.
    Ptr,
    /// Naming authority pointer record.
    Naptr,
    /// Sender policy framework record (legacy).
    Spf,
    /// Delegation signer record.
    Ds,
}

impl RrType {
    /// Uppercase wire name, e.g. `"A"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Ptr => "PTR",
            Self::Naptr => "NAPTR",
            Self::Spf => "SPF",
            Self::Ds => "DS",
        }
    }
}

impl std::fmt::Display for RrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Record Sets ============

/// Alias half of an alias record: the AWS resource the record points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasTarget {
    /// Hosted zone of the target resource (a load balancer zone, a
    /// CloudFront zone, or the record's own zone for record-to-record
    /// aliases).
    pub hosted_zone_id: String,
    /// Target hostname, e.g. `"dualstack.k8s-app-x.elb.amazonaws.com."`.
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    /// Whether Route 53 checks the target's health before answering.
    pub evaluate_target_health: bool,
}

/// One literal record value inside a non-alias record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecord {
    pub value: String,
}

/// Wire wrapper for the `<ResourceRecords>` element list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecords {
    #[serde(rename = "ResourceRecord", default)]
    pub items: Vec<ResourceRecord>,
}

/// A Route 53 resource record set.
///
/// Field order follows the API schema; Route 53 validates element order on
/// submission. Optional fields that this tool never writes are skipped when
/// serializing, so an UPSERT body carries exactly the fields read from the
/// zone (with the weight swapped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRecordSet {
    /// Fully qualified record name with trailing dot.
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: RrType,
    /// Distinguishes records sharing a name under weighted routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_identifier: Option<String>,
    /// Relative routing weight, `0..=255`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<ResourceRecords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<AliasTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_id: Option<String>,
}

impl ResourceRecordSet {
    /// Whether this is an `A` record with an alias target, i.e. the only
    /// kind of record this tool is willing to touch.
    #[must_use]
    pub fn is_alias_a(&self) -> bool {
        self.record_type == RrType::A && self.alias_target.is_some()
    }

    /// Alias target hostname, if this is an alias record.
    #[must_use]
    pub fn alias_dns_name(&self) -> Option<&str> {
        self.alias_target.as_ref().map(|t| t.dns_name.as_str())
    }
}

// ============ Pagination ============

/// Continuation cursor for `ListResourceRecordSets`.
///
/// Route 53 paginates by position in the zone's (name, type, identifier)
/// ordering rather than by page number; the triple from a truncated
/// response is passed verbatim into the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub record_name: String,
    pub record_type: RrType,
    /// Present only when the next record is part of a weighted set.
    pub set_identifier: Option<String>,
}

/// One page of record sets plus the cursor for the next page, if any.
#[derive(Debug, Clone)]
pub struct RecordSetPage {
    pub record_sets: Vec<ResourceRecordSet>,
    /// `None` when the listing is complete.
    pub next: Option<PageCursor>,
}

// ============ Change Batches ============

/// Batch action. This tool only ever upserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    Upsert,
}

/// A single change: an action applied to a fully specified record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Change {
    pub action: ChangeAction,
    pub resource_record_set: ResourceRecordSet,
}

impl Change {
    /// Upsert the given record set.
    #[must_use]
    pub fn upsert(resource_record_set: ResourceRecordSet) -> Self {
        Self {
            action: ChangeAction::Upsert,
            resource_record_set,
        }
    }
}

/// Wire wrapper for the `<Changes>` element list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    #[serde(rename = "Change", default)]
    pub items: Vec<Change>,
}

/// An atomic batch of changes against one hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeBatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub changes: Changes,
}

impl ChangeBatch {
    #[must_use]
    pub fn new(changes: Vec<Change>) -> Self {
        Self {
            comment: None,
            changes: Changes { items: changes },
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Number of changes in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.items.is_empty()
    }
}

// ============ Change Info ============

/// Propagation state of a submitted change batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    /// Accepted, still propagating to the authoritative servers.
    Pending,
    /// Propagated everywhere.
    Insync,
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => f.write_str("PENDING"),
            Self::Insync => f.write_str("INSYNC"),
        }
    }
}

/// Receipt for a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfo {
    /// Change id, e.g. `"/change/C2682N5HXP0BZ4"`.
    pub id: String,
    pub status: ChangeStatus,
    /// Submission time as reported by Route 53.
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- record set predicates ----

    fn alias_a(name: &str, target: &str) -> ResourceRecordSet {
        ResourceRecordSet {
            name: name.to_string(),
            record_type: RrType::A,
            set_identifier: Some("live".to_string()),
            weight: Some(100),
            ttl: None,
            resource_records: None,
            alias_target: Some(AliasTarget {
                hosted_zone_id: "Z35SXDOTRQ7X7K".to_string(),
                dns_name: target.to_string(),
                evaluate_target_health: true,
            }),
            health_check_id: None,
        }
    }

    #[test]
    fn alias_a_record_is_alias_a() {
        let rs = alias_a("app.nimbusops.io.", "k8s-app-x.elb.amazonaws.com.");
        assert!(rs.is_alias_a());
        assert_eq!(rs.alias_dns_name(), Some("k8s-app-x.elb.amazonaws.com."));
    }

    #[test]
    fn plain_a_record_is_not_alias_a() {
        let mut rs = alias_a("app.nimbusops.io.", "k8s-app-x.elb.amazonaws.com.");
        rs.alias_target = None;
        rs.ttl = Some(300);
        rs.resource_records = Some(ResourceRecords {
            items: vec![ResourceRecord {
                value: "192.0.2.10".to_string(),
            }],
        });
        assert!(!rs.is_alias_a());
        assert_eq!(rs.alias_dns_name(), None);
    }

    #[test]
    fn non_a_alias_is_not_alias_a() {
        let mut rs = alias_a("app.nimbusops.io.", "k8s-app-x.elb.amazonaws.com.");
        rs.record_type = RrType::Aaaa;
        assert!(!rs.is_alias_a());
    }

    // ---- serde names ----

    #[test]
    fn rr_type_serializes_uppercase() {
        let json_res = serde_json::to_string(&RrType::Aaaa);
        assert!(json_res.is_ok(), "expected Ok(..), got {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, "\"AAAA\"");

        let back_res = serde_json::from_str::<RrType>("\"SOA\"");
        assert!(back_res.is_ok(), "expected Ok(..), got {back_res:?}");
        let Ok(back) = back_res else {
            return;
        };
        assert_eq!(back, RrType::Soa);
    }

    #[test]
    fn rr_type_display_matches_wire_name() {
        assert_eq!(RrType::A.to_string(), "A");
        assert_eq!(RrType::Caa.to_string(), "CAA");
    }

    #[test]
    fn change_action_serializes_uppercase() {
        let json_res = serde_json::to_string(&ChangeAction::Upsert);
        assert!(json_res.is_ok(), "expected Ok(..), got {json_res:?}");
        let Ok(json) = json_res else {
            return;
        };
        assert_eq!(json, "\"UPSERT\"");
    }

    // ---- change batches ----

    #[test]
    fn change_batch_counts_changes() {
        let batch = ChangeBatch::new(vec![
            Change::upsert(alias_a("app.nimbusops.io.", "maintenance.nimbusops.io.")),
            Change::upsert(alias_a("api.nimbusops.io.", "maintenance.nimbusops.io.")),
        ]);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());
        assert!(batch.comment.is_none());
    }

    #[test]
    fn change_batch_comment_is_attached() {
        let batch = ChangeBatch::new(vec![]).with_comment("maintenance on");
        assert!(batch.is_empty());
        assert_eq!(batch.comment.as_deref(), Some("maintenance on"));
    }
}
