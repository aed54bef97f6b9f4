use axum::{
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

/// POST /api/users
///
/// The id and timestamps in the response are generated here and are not
/// reconciled with the row the store writes.
pub async fn handle_create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let req: CreateUserRequest = serde_json::from_slice(&body?)?;

    let user = User::new(req.email);
    let stored = state.users.create_user(&user.email).await?;
    debug!(response_id = %user.id, stored_id = %stored.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}
