mod split;

pub use split::split_url;

use crate::character_sets::is_c0_control_or_space;
use crate::error::{ParseError, Result};

/// Check that a string is a syntactically valid absolute URL with a host.
///
/// ASCII control characters, spaces, backslashes and non-ASCII bytes are
/// rejected up front; a WHATWG parser would silently strip, encode or
/// reinterpret them as `/`, which breaks the literal splitting done by
/// [`split_url`]. The rest of the validation is delegated to the `url` crate.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUrl`] for any invalid input.
pub fn validate_url(input: &str) -> Result<()> {
    let bytes = input.as_bytes();

    // First char must be ASCII alphabetic for scheme
    match bytes.first() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return Err(ParseError::InvalidUrl(None)),
    }

    if !input.is_ascii() || bytes.iter().any(|&b| is_c0_control_or_space(b) || b == b'\\') {
        return Err(ParseError::InvalidUrl(None));
    }

    match url::Url::parse(input) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        Ok(_) => {
            tracing::debug!(input, "rejected URL without host");
            Err(ParseError::InvalidUrl(None))
        }
        Err(err) => {
            tracing::debug!(input, error = %err, "rejected malformed URL");
            Err(ParseError::InvalidUrl(None))
        }
    }
}
