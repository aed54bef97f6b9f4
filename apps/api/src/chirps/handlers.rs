use axum::{extract::rejection::BytesRejection, http::StatusCode, Json};
use bytes::Bytes;
use serde::Serialize;

use crate::chirps::validation::{validate, MAX_CHIRP_LENGTH};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct CleanedChirp {
    pub cleaned_body: String,
}

/// POST /api/validate_chirp
///
/// A body over the request size limit is necessarily over the chirp limit,
/// so it is reported as too long rather than as a framework rejection.
pub async fn handle_validate_chirp(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CleanedChirp>, AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::TooLong {
                max: MAX_CHIRP_LENGTH,
            }
        } else {
            AppError::from(rejection)
        }
    })?;

    let cleaned_body = validate(&body)?;
    Ok(Json(CleanedChirp { cleaned_body }))
}
