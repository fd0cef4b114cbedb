//! Token encode/decode for shared notes.
//!
//! Wire format: JSON payload `{text, lat, lon, heading, radius, tolerance,
//! createdAt}` in base64. New tokens use the URL-safe alphabet without
//! padding; decode also accepts standard padded base64 so links minted by
//! older clients keep working.

use crate::model::note::{
    Note, SharedNote, DEFAULT_UNLOCK_RADIUS_M, DEFAULT_UNLOCK_TOLERANCE_DEG,
};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use log::warn;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FRAGMENT_MARKER: &str = "#share=";

/// Decode failure for a share token.
#[derive(Debug)]
pub enum ShareDecodeError {
    /// Token is not valid base64 in any accepted alphabet.
    InvalidEncoding(base64::DecodeError),
    /// Decoded bytes are not valid JSON.
    InvalidJson(serde_json::Error),
    /// JSON is well-formed but missing or mistyping a required field
    /// (`text`, `lat`, `lon`).
    InvalidPayload(String),
}

impl Display for ShareDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding(err) => write!(f, "share token is not valid base64: {err}"),
            Self::InvalidJson(err) => write!(f, "share token payload is not valid JSON: {err}"),
            Self::InvalidPayload(message) => write!(f, "share token payload invalid: {message}"),
        }
    }
}

impl Error for ShareDecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(err) => Some(err),
            Self::InvalidJson(err) => Some(err),
            Self::InvalidPayload(_) => None,
        }
    }
}

/// Serialized token payload. `radius`, `tolerance` and `createdAt` are
/// optional on decode for compatibility with older tokens that omit them.
#[derive(Debug, Serialize, Deserialize)]
struct SharePayload {
    text: String,
    lat: f64,
    lon: f64,
    heading: Option<f64>,
    #[serde(default)]
    radius: Option<f64>,
    #[serde(default)]
    tolerance: Option<f64>,
    #[serde(default, rename = "createdAt")]
    created_at: Option<i64>,
}

/// Encodes a note and its unlock parameters into a share token.
///
/// Deterministic: the same note and parameters always yield the same token.
pub fn encode(note: &Note, unlock_radius_m: f64, unlock_tolerance_deg: f64) -> String {
    let payload = SharePayload {
        text: note.text.clone(),
        lat: note.lat,
        lon: note.lon,
        heading: note.heading,
        radius: Some(unlock_radius_m),
        tolerance: Some(unlock_tolerance_deg),
        created_at: Some(note.created_at),
    };
    let json = serde_json::to_string(&payload).expect("share payload serializes to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decodes a share token into a session-scoped `SharedNote`.
///
/// `now_ms` supplies the `createdAt` fallback for tokens that omit it; the
/// derived id is `shared-<createdAt>`, so re-decoding such a token at a
/// different time yields a different id. Decode once per session and reuse
/// the result.
///
/// # Errors
/// - `InvalidEncoding` when the token is not base64 in any accepted alphabet.
/// - `InvalidJson` when the decoded bytes are not JSON.
/// - `InvalidPayload` when `text`, `lat` or `lon` is missing or mistyped.
pub fn decode(token: &str, now_ms: i64) -> Result<SharedNote, ShareDecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .map_err(ShareDecodeError::InvalidEncoding)?;

    let value: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(ShareDecodeError::InvalidJson)?;
    let payload: SharePayload = serde_json::from_value(value)
        .map_err(|err| ShareDecodeError::InvalidPayload(err.to_string()))?;

    let created_at = payload.created_at.unwrap_or(now_ms);

    Ok(SharedNote {
        id: format!("shared-{created_at}"),
        text: payload.text,
        lat: payload.lat,
        lon: payload.lon,
        heading: payload.heading,
        created_at,
        unlock_radius_m: payload.radius.unwrap_or(DEFAULT_UNLOCK_RADIUS_M),
        unlock_tolerance_deg: payload.tolerance.unwrap_or(DEFAULT_UNLOCK_TOLERANCE_DEG),
    })
}

/// Builds the URL fragment carrying a token.
pub fn share_fragment(token: &str) -> String {
    format!("{FRAGMENT_MARKER}{token}")
}

/// Extracts the token from a URL fragment, if present.
///
/// Mirrors the original link syntax: the token runs from `#share=` to the
/// next `&` or end of string, and must be non-empty.
pub fn token_from_fragment(fragment: &str) -> Option<&str> {
    let start = fragment.find(FRAGMENT_MARKER)? + FRAGMENT_MARKER.len();
    let rest = &fragment[start..];
    let token = match rest.find('&') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Startup helper: token extraction plus decode, with warn-level logging on
/// failure. A malformed link degrades to "no shared note", never an error.
pub fn shared_note_from_fragment(fragment: &str, now_ms: i64) -> Option<SharedNote> {
    let token = token_from_fragment(fragment)?;
    match decode(token, now_ms) {
        Ok(shared) => Some(shared),
        Err(err) => {
            warn!("event=share_decode_failed module=share status=degraded error={err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{share_fragment, token_from_fragment};

    #[test]
    fn fragment_round_trip_extracts_token() {
        let fragment = share_fragment("eyJhIjoxfQ");
        assert_eq!(token_from_fragment(&fragment), Some("eyJhIjoxfQ"));
    }

    #[test]
    fn token_stops_at_ampersand_and_rejects_empty() {
        assert_eq!(token_from_fragment("#share=abc&lang=en"), Some("abc"));
        assert_eq!(token_from_fragment("#share="), None);
        assert_eq!(token_from_fragment("#other=abc"), None);
    }
}
