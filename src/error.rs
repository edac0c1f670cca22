/// Errors that can occur while building a URL or one of its components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Scheme does not match `[a-z][a-z0-9+.-]*`
    InvalidScheme,
    /// Port number outside of 0..=65535
    PortOutOfRange(i64),
    /// Path is not a bare URL path
    InvalidPath,
    /// Query string does not match the pair grammar
    InvalidQueryString,
    /// Fragment contains characters outside of the allowed class
    InvalidFragmentIdentifier,
    /// No scheme provided for the URL
    MissingScheme,
    /// No host provided for the URL
    MissingHost,
    /// Invalid URL, optionally carrying the component failure that caused it
    InvalidUrl(Option<Box<ParseError>>),
}

impl ParseError {
    /// Wrap a lower-level failure into a URL-level `InvalidUrl`.
    pub(crate) fn invalid_url(cause: Self) -> Self {
        Self::InvalidUrl(Some(Box::new(cause)))
    }

    /// True for every variant describing malformed input, as opposed to a
    /// missing required part.
    pub fn is_invalid_format(&self) -> bool {
        !matches!(self, Self::MissingScheme | Self::MissingHost)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::PortOutOfRange(port) => {
                return write!(
                    f,
                    "Invalid port number {port}. Port must be within range 0 - 65535"
                );
            }
            Self::InvalidPath => "Invalid URL path",
            Self::InvalidQueryString => "Invalid query string",
            Self::InvalidFragmentIdentifier => "Invalid fragment identifier",
            Self::MissingScheme => "No scheme provided for the URL",
            Self::MissingHost => "No host provided for the URL",
            Self::InvalidUrl(_) => "Invalid URL",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUrl(Some(cause)) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// Result type for URL construction
pub type Result<T> = core::result::Result<T, ParseError>;
