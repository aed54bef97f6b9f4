use axum::{extract::State, http::StatusCode, response::Html};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /admin/metrics
pub async fn handle_metrics(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics(state.visits.read()))
}

fn render_metrics(hits: u64) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"#
    )
}

/// POST /admin/reset
///
/// Dev only. Deletes every user, then zeroes the visit counter. The counter
/// is left untouched when the delete fails.
pub async fn handle_reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    if !state.config.is_dev() {
        warn!(platform = %state.config.platform, "Refusing reset outside dev");
        return Err(AppError::Forbidden);
    }

    state.users.reset_users().await?;
    state.visits.reset();
    info!("Users deleted and visit counter reset");

    Ok(StatusCode::OK)
}
