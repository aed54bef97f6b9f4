use serde::Deserialize;

use crate::chirps::moderation;
use crate::errors::AppError;

/// Maximum chirp length, counted in Unicode scalar values.
pub const MAX_CHIRP_LENGTH: usize = 140;

#[derive(Debug, Deserialize)]
pub struct ChirpSubmission {
    pub body: String,
}

/// Decodes a raw chirp submission, enforces the length limit and returns
/// the moderated text.
///
/// The length check runs on the decoded body before moderation.
pub fn validate(raw_body: &[u8]) -> Result<String, AppError> {
    let submission: ChirpSubmission = serde_json::from_slice(raw_body)?;

    let len = submission.body.chars().count();
    if len > MAX_CHIRP_LENGTH {
        tracing::debug!(len, "Rejecting chirp over the length limit");
        return Err(AppError::TooLong {
            max: MAX_CHIRP_LENGTH,
        });
    }

    Ok(moderation::filter(&submission.body))
}
