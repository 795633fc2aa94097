use super::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Address record operations and zone publishing.
///
/// Every method returns the decoded response body untouched; interpreting the
/// service's `status`/`data`/`msgs` fields is left to the caller.
#[async_trait]
pub trait RecordApi: Send {
    /// Commits pending changes in `zone`.
    async fn publish_zone(&mut self, zone: &str) -> Result<Value>;

    async fn create_a_record(
        &mut self,
        zone: &str,
        fqdn: &str,
        address: &str,
        ttl: u32,
    ) -> Result<Value>;

    /// Lists record references under `fqdn`, or fetches one record when
    /// `record_id` is given.
    async fn read_a_record(
        &mut self,
        zone: &str,
        fqdn: &str,
        record_id: Option<&str>,
    ) -> Result<Value>;

    async fn delete_a_record(&mut self, zone: &str, fqdn: &str, record_id: &str) -> Result<Value>;
}
