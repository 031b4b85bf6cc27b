use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ChangeBatch, ChangeInfo, PageCursor, RecordSetPage};

/// Zone record storage seam.
///
/// One page per [`list_record_sets`](Self::list_record_sets) call; the
/// caller drives the cursor loop. Implemented by
/// [`Route53Client`](crate::Route53Client); tools build their pipelines on
/// this trait so tests can swap in an in-memory store.
#[async_trait]
pub trait ZoneRecordStore: Send + Sync {
    /// Fetch one page of record sets, starting at `cursor` (or the top of
    /// the zone when `None`).
    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&PageCursor>,
    ) -> Result<RecordSetPage>;

    /// Submit one atomic change batch against the zone.
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo>;
}
