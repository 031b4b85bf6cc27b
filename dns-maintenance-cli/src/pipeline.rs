//! Fetch, filter and weight planning for one environment.
//!
//! The pipeline is a single pass: walk the zone page by page, keep the
//! allow-listed alias records, then map each one to an `UPSERT` carrying its
//! new weight. Nothing here talks to the network directly; everything goes
//! through [`ZoneRecordStore`].

use dns_maintenance_route53::{Change, ResourceRecordSet, Result, ZoneRecordStore};
use regex::Regex;

use crate::context::{EnvContext, LOAD_BALANCER_PATTERN, Mode};

/// Collect every switchable record in the zone, in fetch order.
///
/// Each page is filtered before accumulation; the loop follows the
/// continuation cursor until the listing reports no further pages. Any
/// transport or API error aborts the walk.
pub async fn fetch_switchable_records(
    store: &dyn ZoneRecordStore,
    ctx: &EnvContext,
) -> Result<Vec<ResourceRecordSet>> {
    let allowed = ctx.allowed_record_names();
    let mut matched = Vec::new();
    let mut cursor = None;
    let mut pages = 0u32;

    loop {
        let page = store.list_record_sets(&ctx.zone_id, cursor.as_ref()).await?;
        pages += 1;
        matched.extend(
            page.record_sets
                .into_iter()
                .filter(|record| is_switchable(record, &allowed)),
        );
        match page.next {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    tracing::debug!(
        "scanned {pages} page(s), matched {} record set(s)",
        matched.len()
    );
    Ok(matched)
}

/// A record this tool may re-weight: an `A` alias whose name is on the
/// environment's allow-list.
fn is_switchable(record: &ResourceRecordSet, allowed: &[String]) -> bool {
    record.is_alias_a() && allowed.iter().any(|name| *name == record.name)
}

/// Weighted-routing plan for one maintenance switch.
///
/// `on` sends all traffic to the canonical maintenance target; `off` sends
/// it back to whatever the load-balancer controller minted. Either way the
/// rule is binary: a record's weight becomes 100 or 0, nothing in between.
#[derive(Debug)]
pub struct WeightPlanner {
    mode: Mode,
    maintenance_target: String,
    load_balancer: Regex,
}

impl WeightPlanner {
    pub fn new(mode: Mode, ctx: &EnvContext) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            mode,
            maintenance_target: ctx.maintenance_target(),
            load_balancer: Regex::new(LOAD_BALANCER_PATTERN)?,
        })
    }

    /// Target weight for a record by its alias target.
    fn weight_for(&self, alias_target: &str) -> u64 {
        let routed = match self.mode {
            Mode::On => alias_target == self.maintenance_target,
            Mode::Off => self.load_balancer.is_match(alias_target),
        };
        if routed { 100 } else { 0 }
    }

    /// Build the upsert set: identity fields copied, weight replaced.
    ///
    /// Fields this tool does not manage (TTL, literal resource records,
    /// health-check associations) are not resubmitted.
    pub fn plan(&self, records: &[ResourceRecordSet]) -> Vec<Change> {
        records
            .iter()
            .map(|record| {
                let weight = self.weight_for(record.alias_dns_name().unwrap_or(""));
                Change::upsert(ResourceRecordSet {
                    name: record.name.clone(),
                    record_type: record.record_type,
                    set_identifier: record.set_identifier.clone(),
                    weight: Some(weight),
                    ttl: None,
                    resource_records: None,
                    alias_target: record.alias_target.clone(),
                    health_check_id: None,
                })
            })
            .collect()
    }
}
