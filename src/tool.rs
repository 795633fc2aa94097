//! List, add and delete workflows for address records.
//!
//! Mutations are followed by a zone publish so the change takes effect. The
//! two calls are not atomic: when publish fails the record change stays
//! pending on the server and the publish error is returned.

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{
    error::Result,
    models::{ARecordData, ApiResponse},
    DynectError, RecordApi,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecordEntry {
    pub record_id: String,
    pub address: String,
}

pub async fn list_a<C>(client: &mut C, zone: &str, fqdn: &str) -> Result<Vec<ARecordEntry>>
where
    C: RecordApi + ?Sized,
{
    let listing = expect_success(client.read_a_record(zone, fqdn, None).await?)?;
    let references: Vec<String> = if listing.data.is_null() {
        Vec::new()
    } else {
        decode_data(listing.data)?
    };
    debug!("{} A record(s) under {}", references.len(), fqdn);

    let mut records = Vec::with_capacity(references.len());
    for reference in &references {
        let record_id = record_id_from_reference(reference).ok_or_else(|| {
            DynectError::Api(format!("Malformed record reference: {}", reference))
        })?;
        let detail = expect_success(client.read_a_record(zone, fqdn, Some(record_id)).await?)?;
        let data: ARecordData = decode_data(detail.data)?;

        records.push(ARecordEntry {
            record_id: record_id.to_string(),
            address: data.rdata.address,
        });
    }
    Ok(records)
}

pub async fn add_a<C>(client: &mut C, zone: &str, fqdn: &str, address: &str, ttl: u32) -> Result<()>
where
    C: RecordApi + ?Sized,
{
    expect_success(client.create_a_record(zone, fqdn, address, ttl).await?)?;
    expect_success(client.publish_zone(zone).await?)?;
    info!("Added A record {} -> {}", fqdn, address);
    Ok(())
}

pub async fn del_a<C>(client: &mut C, zone: &str, fqdn: &str, address: &str) -> Result<()>
where
    C: RecordApi + ?Sized,
{
    let record_id = list_a(client, zone, fqdn)
        .await?
        .into_iter()
        .rev()
        .find(|record| record.address == address)
        .map(|record| record.record_id)
        .ok_or_else(|| DynectError::RecordNotFound {
            zone: zone.to_string(),
            fqdn: fqdn.to_string(),
            address: address.to_string(),
        })?;

    expect_success(client.delete_a_record(zone, fqdn, &record_id).await?)?;
    expect_success(client.publish_zone(zone).await?)?;
    info!("Deleted A record {} -> {} (record id: {})", fqdn, address, record_id);
    Ok(())
}

/// Last non-empty segment of a reference such as
/// `/REST/ARecord/example.com/www.example.com/12345`.
pub fn record_id_from_reference(reference: &str) -> Option<&str> {
    reference.rsplit('/').find(|segment| !segment.is_empty())
}

fn expect_success(body: Value) -> Result<ApiResponse<Value>> {
    let response: ApiResponse<Value> = serde_json::from_value(body)
        .map_err(|e| DynectError::Api(format!("Malformed response: {}", e)))?;

    if !response.is_success() {
        return Err(DynectError::Api(response.first_info()));
    }
    Ok(response)
}

fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T> {
    serde_json::from_value(data)
        .map_err(|e| DynectError::Api(format!("Unexpected response data: {}", e)))
}
