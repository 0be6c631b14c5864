//! Response body decoding.

use roster_model::{Record, ensure_unique_ids};

use crate::error::Result;

/// Decode a member list body: a JSON array of records with unique ids.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_slice(body)?;
    ensure_unique_ids(&records)?;
    Ok(records)
}
