//! Parser for the external generative-ranking service's output.
//!
//! The service is asked for a strict JSON array but in practice wraps
//! it in markdown fences or prose. Parsing tries the strict form first,
//! then extracts the first balanced top-level array; anything else is an
//! error for the caller to handle, never a silent empty list.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// One recommended place as returned by the ranking service.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub reason: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Error)]
pub enum RecommendParseError {
    #[error("response contains no JSON array")]
    NoJsonArray,

    #[error("malformed recommendation JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses the raw service response into recommendations.
pub fn parse_recommendations(raw: &str) -> Result<Vec<Recommendation>, RecommendParseError> {
    let cleaned = strip_fences(raw);

    match serde_json::from_str(cleaned) {
        Ok(list) => Ok(list),
        Err(strict_err) => {
            debug!(%strict_err, "strict parse failed, trying array extraction");
            let array = extract_array(cleaned).ok_or(RecommendParseError::NoJsonArray)?;
            Ok(serde_json::from_str(array)?)
        }
    }
}

fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = body.strip_prefix("json").unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Finds the first balanced top-level `[...]` substring, skipping
/// brackets inside string literals.
fn extract_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => in_string = false,
                _ => escaped = false,
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
