use serde::{Deserialize, Serialize};
use zipcode_core::{DirectoryError, ZipCode, ZipCodePage, ZipCodeRecord};

#[derive(Debug, Deserialize)]
pub struct CreateZipCodeRequest {
    pub zip: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub timezone: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TryFrom<CreateZipCodeRequest> for ZipCodeRecord {
    type Error = DirectoryError;

    fn try_from(request: CreateZipCodeRequest) -> Result<Self, Self::Error> {
        Ok(ZipCodeRecord {
            zip: ZipCode::new(request.zip)?,
            city: request.city,
            county: request.county,
            state: request.state,
            timezone: request.timezone,
            kind: request.kind,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ZipCodeResponse {
    pub zip: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub timezone: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<ZipCodeRecord> for ZipCodeResponse {
    fn from(record: ZipCodeRecord) -> Self {
        Self {
            zip: record.zip.to_string(),
            city: record.city,
            county: record.county,
            state: record.state,
            timezone: record.timezone,
            kind: record.kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ZipCodePageResponse {
    pub items: Vec<ZipCodeResponse>,
    pub total: u64,
}

impl From<ZipCodePage> for ZipCodePageResponse {
    fn from(page: ZipCodePage) -> Self {
        Self {
            items: page.items.into_iter().map(ZipCodeResponse::from).collect(),
            total: page.total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
