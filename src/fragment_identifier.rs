use crate::character_sets::is_fragment_byte;
use crate::error::{ParseError, Result};
use crate::string_valued::impl_string_valued;

/// The fragment component of a URL, always stored with exactly one leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentIdentifier {
    value: String,
}

impl FragmentIdentifier {
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFragmentIdentifier`] if any character
    /// after the leading `#` run is outside `[?%!$&'()*+,;=A-Za-z0-9-._~:@/]`.
    pub fn new(value: &str) -> Result<Self> {
        let body = value.trim_start_matches('#');
        if !body.bytes().all(is_fragment_byte) {
            return Err(ParseError::InvalidFragmentIdentifier);
        }

        Ok(Self {
            value: format!("#{body}"),
        })
    }
}

impl_string_valued!(FragmentIdentifier);
