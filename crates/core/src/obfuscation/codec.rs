//! Base64 encoding of opaque identifiers.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use finboard_shared::types::AccountId;

use super::error::ObfuscationError;

/// Encodes an identifier for exposure in a URL or page.
///
/// Uses the standard padded base64 alphabet over the UTF-8 bytes.
#[must_use]
pub fn encode_id(id: &str) -> String {
    STANDARD.encode(id.as_bytes())
}

/// Decodes a token produced by [`encode_id`].
///
/// # Errors
///
/// Returns `ObfuscationError::MalformedInput` if the token is not valid
/// padded base64 or does not decode to UTF-8 text.
pub fn decode_id(token: &str) -> Result<String, ObfuscationError> {
    let bytes = STANDARD
        .decode(token)
        .map_err(|e| ObfuscationError::MalformedInput(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ObfuscationError::MalformedInput(e.to_string()))
}

/// Returns the client-visible handle for an account.
#[must_use]
pub fn shareable_id(account_id: &AccountId) -> String {
    encode_id(account_id.as_str())
}
