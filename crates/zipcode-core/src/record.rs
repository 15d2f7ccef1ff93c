use crate::zipcode::ZipCode;
use serde::{Deserialize, Serialize};

/// A stored zip code record.
///
/// Records are immutable once created; the directory never updates one in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCodeRecord {
    pub zip: ZipCode,
    pub city: String,
    pub county: String,
    pub state: String,
    pub timezone: String,
    /// Classification of the zip code, e.g. `STANDARD` or `PO BOX`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// The first page of records together with the total record count.
///
/// `total` is read independently of `items` and may disagree with
/// `items.len()` while writes are in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCodePage {
    pub items: Vec<ZipCodeRecord>,
    pub total: u64,
}
