//! Profanity masking for chirp bodies.
//!
//! Matching is per whitespace-separated token, case-insensitive and exact:
//! `"Sharbert"` is masked, `"sharberts"` and `"sharbert!"` are not.

/// Words masked in every chirp.
pub const DENYLIST: &[&str] = &["kerfuffle", "sharbert", "fornax"];

pub const MASK: &str = "****";

/// Returns `text` with every denylisted token replaced by [`MASK`].
///
/// Tokens are rejoined with single spaces, so runs of whitespace (and any
/// leading or trailing whitespace) are normalized away.
pub fn filter(text: &str) -> String {
    text.split_whitespace()
        .map(|word| if is_denied(word) { MASK } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_denied(word: &str) -> bool {
    let lower = word.to_lowercase();
    DENYLIST.contains(&lower.as_str())
}
