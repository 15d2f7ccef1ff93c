use crate::error::Result;
use crate::model::{CountResponse, CreateZipCodeRequest, ZipCodePageResponse, ZipCodeResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{error, info, warn};
use zipcode_core::{DirectoryError, ZipCode, ZipCodeRecord};

pub async fn list_handler(State(state): State<AppState>) -> Result<Json<ZipCodePageResponse>> {
    let page = state
        .directory()
        .list_first_page_with_total()
        .await
        .inspect_err(|err| error!(error = %err, "failed to list zip codes"))?;

    Ok(Json(page.into()))
}

pub async fn count_handler(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    let total = state
        .directory()
        .count_all()
        .await
        .inspect_err(|err| error!(error = %err, "failed to count zip codes"))?;

    Ok(Json(CountResponse { total }))
}

pub async fn find_handler(
    Path(zip): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ZipCodeResponse>> {
    info!(zip = %zip, "finding zip code");

    let found = match ZipCode::new(zip.as_str()) {
        Ok(code) => state.directory().find_by_id(&code).await,
        Err(err) => Err(err),
    };

    // Any lookup failure is reported to the caller as a miss.
    let record = found.map_err(|err| {
        error!(zip = %zip, error = %err, "failed to find zip code");
        DirectoryError::NotFound(zip)
    })?;

    Ok(Json(record.into()))
}

pub async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateZipCodeRequest>,
) -> Result<(StatusCode, Json<ZipCodeResponse>)> {
    info!(?request, "creating zip code");

    let input = ZipCodeRecord::try_from(request)?;
    let outcome = state
        .directory()
        .create(input)
        .await
        .inspect_err(|err| error!(error = %err, "failed to create zip code"))?;

    let status = if outcome.created {
        info!(zip = %outcome.record.zip, "zip code created");
        StatusCode::CREATED
    } else {
        info!(zip = %outcome.record.zip, "zip code already exists");
        StatusCode::OK
    };

    Ok((status, Json(outcome.record.into())))
}

pub async fn delete_all_handler(State(state): State<AppState>) -> Result<Json<u64>> {
    warn!("deleting all zip codes");

    let removed = state
        .directory()
        .delete_all()
        .await
        .inspect_err(|err| error!(error = %err, "failed to delete zip codes"))?;

    Ok(Json(removed))
}
