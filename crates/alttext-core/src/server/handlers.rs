//! Request handlers for the alt-text API.

use super::AppState;
use crate::error::{AltTextError, ValidationError};
use crate::types::{AltTextResponse, CaptionRequest};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Query string of `GET /generate-alt-text`.
///
/// Repeated keys are allowed; the first occurrence of each wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AltTextQuery {
    pub image_path: Option<String>,
    /// Parsed leniently by [`parse_count`]
    pub count: Option<String>,
    pub model: Option<String>,
}

impl AltTextQuery {
    /// Build from decoded `key=value` pairs in query-string order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "image_path" => &mut query.image_path,
                "count" => &mut query.count,
                "model" => &mut query.model,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Parse a sample count the forgiving way.
///
/// Leading spaces and tabs and a sign are accepted and trailing junk after
/// the digits is ignored (`"5abc"` is 5). Input without leading digits, or
/// digits that overflow an `i64`, keeps `default`. Negative values mean no
/// samples.
pub fn parse_count(raw: &str, default: usize) -> usize {
    let s = raw.trim_start_matches([' ', '\t']);
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return default;
    }
    match s[..sign_len + digits].parse::<i64>() {
        Ok(n) if n < 0 => 0,
        Ok(n) => usize::try_from(n).unwrap_or(default),
        Err(_) => default,
    }
}

/// `GET /generate-alt-text?image_path=..&count=..&model=..`
pub async fn generate_alt_text(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<AltTextResponse>, AltTextError> {
    let query = AltTextQuery::from_pairs(pairs);

    let image_path = query
        .image_path
        .filter(|p| !p.is_empty())
        .ok_or(ValidationError::MissingImagePath)?;

    let count = query
        .count
        .as_deref()
        .map(|raw| parse_count(raw, state.default_count))
        .unwrap_or(state.default_count);

    let model = query
        .model
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| state.default_model.clone());

    let request = CaptionRequest::new(image_path, model, count);
    let response = state.sampler.generate(&request).await?;
    Ok(Json(response))
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

impl IntoResponse for AltTextError {
    fn into_response(self) -> Response {
        match self {
            AltTextError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            AltTextError::Execution(e) => {
                tracing::error!("Error executing command: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error executing command: {e}"),
                )
                    .into_response()
            }
            other => {
                tracing::error!("Request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
