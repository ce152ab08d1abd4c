//! Free-text device name normalization.
//!
//! Listing forms send whatever the seller typed, so the same device has to
//! classify identically across notation styles ("Apple iPad (3rd Gen)",
//! "iPad (3 generation)", "ipad  (3rd generation)").

use std::sync::LazyLock;

use regex::Regex;

/// Matches "(3rd Gen)", "(3 gen)", "(3rd generation)", "(3rd Gen.)".
static GENERATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(\s*(\d+)\s*(?:st|nd|rd|th)?\s*gen(?:eration)?\.?\s*\)")
        .expect("Invalid generation regex")
});

const APPLE_PREFIX: &str = "apple ";

/// Remove a leading "Apple " (any case).
pub fn strip_apple_prefix(input: &str) -> &str {
    let trimmed = input.trim();
    match trimmed.get(..APPLE_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(APPLE_PREFIX) => {
            trimmed[APPLE_PREFIX.len()..].trim_start()
        }
        _ => trimmed,
    }
}

/// Rewrite every generation suffix to the `(N generation)` form.
pub fn canonicalize_generation(input: &str) -> String {
    GENERATION_RE.replace_all(input, "($1 generation)").into_owned()
}

/// Case-preserving normalization used for the exact lookup stage.
pub fn normalize_model(input: &str) -> String {
    canonicalize_generation(strip_apple_prefix(input))
}

/// Case- and whitespace-insensitive key used by the folded and prefix stages.
pub fn lookup_key(input: &str) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    normalize_model(&collapsed).to_lowercase()
}
