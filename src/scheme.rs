use crate::character_sets::is_scheme_byte;
use crate::error::{ParseError, Result};
use crate::string_valued::impl_string_valued;

/// Scheme families with a well-known meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    NotSpecial,
}

impl SchemeType {
    /// Classify a lower-case scheme.
    /// Uses perfect hash based on length + first byte to minimize comparisons.
    pub fn of(scheme: &str) -> Self {
        let bytes = scheme.as_bytes();

        match (bytes.len(), bytes.first()) {
            (2, Some(b'w')) if bytes == b"ws" => Self::Ws,
            (3, Some(b'w')) if bytes == b"wss" => Self::Wss,
            (3, Some(b'f')) if bytes == b"ftp" => Self::Ftp,
            (4, Some(b'h')) if bytes == b"http" => Self::Http,
            (4, Some(b'f')) if bytes == b"file" => Self::File,
            (5, Some(b'h')) if bytes == b"https" => Self::Https,
            _ => Self::NotSpecial,
        }
    }
}

/// A URI scheme, normalized to lower case.
///
/// ```
/// use url_value::{Scheme, StringValued};
///
/// let scheme = Scheme::new("HTTPS").unwrap();
/// assert_eq!(scheme.as_str(), "https");
/// assert!(scheme.is_https());
/// assert!(Scheme::new("1http").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme {
    value: String,
}

impl Scheme {
    /// Validate and lower-case a scheme token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidScheme`] unless the input is an ASCII
    /// letter followed by letters, digits, `+`, `.` or `-`.
    pub fn new(value: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        let Some((first, rest)) = bytes.split_first() else {
            return Err(ParseError::InvalidScheme);
        };
        if !first.is_ascii_alphabetic() || !rest.iter().all(|&b| is_scheme_byte(b)) {
            return Err(ParseError::InvalidScheme);
        }

        Ok(Self {
            value: value.to_ascii_lowercase(),
        })
    }

    /// Exact, case-sensitive comparison against the normalized value
    pub fn is(&self, candidate: &str) -> bool {
        self.value == candidate
    }

    pub fn is_http(&self) -> bool {
        self.is("http")
    }

    pub fn is_https(&self) -> bool {
        self.is("https")
    }

    pub fn is_ftp(&self) -> bool {
        self.is("ftp")
    }

    pub fn scheme_type(&self) -> SchemeType {
        SchemeType::of(&self.value)
    }
}

impl_string_valued!(Scheme);
