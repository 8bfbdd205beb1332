use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine as _};
use serde::Deserialize;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::AppError;

/// Claims embedded in the credential token's payload segment.
///
/// Every field is optional; unknown fields are ignored. Absent fields render
/// as "Unknown" downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessClaims {
    pub email: Option<String>,
    /// Issued-at (seconds since epoch)
    pub iat: Option<i64>,
    /// ISO 3166-1 alpha-2 country code
    pub country: Option<String>,
    pub sub: Option<String>,
}

/// URL-safe alphabet, padding accepted but not required. Tokens normally
/// arrive unpadded, but upstream layers have been seen re-padding them.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the payload segment of a credential token into [`AccessClaims`].
///
/// The token's signature is NOT verified: this decoder trusts the upstream
/// access-control layer that set the cookie. Do not expose it to untrusted
/// edges.
///
/// Errors:
/// - [`AppError::MalformedToken`] unless the token has exactly 3 dot-delimited
///   segments
/// - [`AppError::TokenDecode`] if the payload segment is not valid base64 or
///   does not parse as a claims record
pub fn decode_unverified(token: &str) -> Result<AccessClaims, AppError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AppError::malformed_token(segments.len()));
    }

    let payload = PAYLOAD_ENGINE
        .decode(segments[1])
        .map_err(|e| AppError::token_decode(format!("payload segment is not valid base64: {e}")))?;

    serde_json::from_slice(&payload)
        .map_err(|e| AppError::token_decode(format!("payload is not a valid claims record: {e}")))
}

const HTTP_DATE: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format a unix timestamp as an RFC-1123-style HTTP date,
/// e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// Returns `None` for timestamps outside the representable range.
pub fn http_date(unix_seconds: i64) -> Option<String> {
    let at = OffsetDateTime::from_unix_timestamp(unix_seconds).ok()?;
    at.format(&HTTP_DATE).ok()
}
