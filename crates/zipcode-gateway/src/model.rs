mod zip_code;

pub use zip_code::{
    CountResponse, CreateZipCodeRequest, HealthResponse, ZipCodePageResponse, ZipCodeResponse,
};
