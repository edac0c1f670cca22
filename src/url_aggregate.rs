use std::sync::OnceLock;

use crate::domain::sub_domain;
use crate::error::{ParseError, Result};
use crate::fragment_identifier::FragmentIdentifier;
use crate::parser::{split_url, validate_url};
use crate::path::Path;
use crate::port_number::PortNumber;
use crate::query_string::QueryString;
use crate::scheme::Scheme;
use crate::string_valued::StringValued;
use crate::url_parts::UrlParts;

/// An absolute URL assembled from validated components.
///
/// The scheme and host are always present; every other part is optional.
/// The canonical string form is computed on first use and cached for the
/// lifetime of the instance. Derived copies (`without_port`,
/// `with_query_string`, ...) start with an empty cache.
///
/// ```
/// use url_value::Url;
///
/// let url = Url::from_string("https://user@www.example.co.uk:8443/a/b?x=1#top").unwrap();
/// assert_eq!(url.host(), "www.example.co.uk");
/// assert_eq!(url.sub_domain(), "www");
/// assert_eq!(url.port().map(|p| p.to_int()), Some(8443));
///
/// let url = url.without_port().without_fragment_identifier();
/// assert_eq!(url.to_string(), "https://user@www.example.co.uk/a/b?x=1");
/// ```
#[derive(Debug)]
pub struct Url {
    scheme: Scheme,
    host: String,
    user: Option<String>,
    password: Option<String>,
    path: Option<Path>,
    port: Option<PortNumber>,
    query_string: Option<QueryString>,
    fragment_identifier: Option<FragmentIdentifier>,
    serialized: OnceLock<String>,
}

impl Url {
    /// Create a URL holding only a scheme and a host.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingHost`] if `host` is empty.
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Result<Self> {
        let host = host.into();
        if host.is_empty() {
            return Err(ParseError::MissingHost);
        }

        Ok(Self {
            scheme,
            host,
            user: None,
            password: None,
            path: None,
            port: None,
            query_string: None,
            fragment_identifier: None,
            serialized: OnceLock::new(),
        })
    }

    /// Parse an absolute URL string.
    ///
    /// The string is checked for URL validity, split into its literal parts,
    /// and each part is run through its component constructor. The result
    /// serializes back to exactly `input`.
    ///
    /// # Errors
    ///
    /// Every failure is reported as [`ParseError::InvalidUrl`]; when a
    /// component or required part was at fault, it is carried as the cause.
    pub fn from_string(input: &str) -> Result<Self> {
        let result = validate_url(input)
            .and_then(|()| split_url(input))
            .and_then(Self::from_parts)
            .map_err(|err| match err {
                ParseError::InvalidUrl(_) => err,
                other => ParseError::invalid_url(other),
            });

        match &result {
            Ok(_) => tracing::trace!(input, "parsed URL"),
            Err(err) => tracing::debug!(input, error = ?err, "rejected URL string"),
        }
        result
    }

    /// Build a URL from named parts.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingScheme`] or [`ParseError::MissingHost`]
    /// when a required part is absent or empty, and
    /// [`ParseError::InvalidUrl`] wrapping the component error when an
    /// optional part is invalid.
    pub fn from_parts(parts: UrlParts) -> Result<Self> {
        let scheme = match parts.scheme.as_deref() {
            Some(scheme) if !scheme.is_empty() => Scheme::new(scheme),
            _ => return Err(ParseError::MissingScheme),
        };
        if parts.host.as_deref().is_none_or(str::is_empty) {
            return Err(ParseError::MissingHost);
        }

        Self::from_checked_parts(scheme, parts).map_err(ParseError::invalid_url)
    }

    fn from_checked_parts(scheme: Result<Scheme>, parts: UrlParts) -> Result<Self> {
        let mut url = Self::new(scheme?, parts.host.unwrap_or_default())?;
        url.user = parts.user;
        url.password = parts.password;
        url.path = parts.path.as_deref().map(Path::new).transpose()?;
        url.port = parts.port.map(PortNumber::new).transpose()?;
        url.query_string = parts.query.as_deref().map(QueryString::new).transpose()?;
        url.fragment_identifier = parts
            .fragment
            .as_deref()
            .map(FragmentIdentifier::new)
            .transpose()?;
        Ok(url)
    }

    /// Decompose back into named parts. Query and fragment keep their
    /// leading `?` and `#`.
    pub fn to_parts(&self) -> UrlParts {
        UrlParts {
            scheme: Some(self.scheme.to_string_value()),
            host: Some(self.host.clone()),
            user: self.user.clone(),
            password: self.password.clone(),
            path: self.path.as_ref().map(StringValued::to_string_value),
            port: self.port.map(|port| i64::from(port.to_int())),
            query: self.query_string.as_ref().map(StringValued::to_string_value),
            fragment: self
                .fragment_identifier
                .as_ref()
                .map(StringValued::to_string_value),
        }
    }

    /// Get the canonical string form
    /// `scheme://[user[:password]@]host[:port][path][?query][#fragment]`.
    pub fn as_str(&self) -> &str {
        self.serialized.get_or_init(|| self.serialize())
    }

    fn serialize(&self) -> String {
        use core::fmt::Write;

        let mut buffer = String::with_capacity(self.host.len() + 32);
        buffer.push_str(self.scheme.as_str());
        buffer.push_str("://");

        // Password is only written together with a user
        if let Some(user) = &self.user {
            buffer.push_str(user);
            if let Some(password) = &self.password {
                buffer.push(':');
                buffer.push_str(password);
            }
            buffer.push('@');
        }

        buffer.push_str(&self.host);
        if let Some(port) = self.port {
            let _ = write!(buffer, ":{port}");
        }

        if let Some(path) = &self.path {
            buffer.push_str(path.as_str());
        }
        if let Some(query_string) = &self.query_string {
            buffer.push_str(query_string.as_str());
        }
        if let Some(fragment_identifier) = &self.fragment_identifier {
            buffer.push_str(fragment_identifier.as_str());
        }
        buffer
    }

    /// Check if this URL's string form starts with `other`'s, ignoring ASCII
    /// case.
    ///
    /// This is a plain string prefix test: `http://example.com/foobar`
    /// starts with `http://example.com/foo`.
    pub fn starts_with(&self, other: &Url) -> bool {
        let this = self.as_str().as_bytes();
        let prefix = other.as_str().as_bytes();
        this.len() >= prefix.len() && this[..prefix.len()].eq_ignore_ascii_case(prefix)
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Best-effort sub domain of the host, see [`COUNTRY_SECOND_LEVEL_DOMAINS`](crate::COUNTRY_SECOND_LEVEL_DOMAINS)
    pub fn sub_domain(&self) -> String {
        sub_domain(&self.host)
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    pub fn contains_path_traversal(&self) -> bool {
        self.path.as_ref().is_some_and(Path::contains_traversal)
    }

    pub fn port(&self) -> Option<PortNumber> {
        self.port
    }

    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    pub fn query_string(&self) -> Option<&QueryString> {
        self.query_string.as_ref()
    }

    pub fn has_query_string(&self) -> bool {
        self.query_string.is_some()
    }

    pub fn fragment_identifier(&self) -> Option<&FragmentIdentifier> {
        self.fragment_identifier.as_ref()
    }

    pub fn has_fragment_identifier(&self) -> bool {
        self.fragment_identifier.is_some()
    }
}

/// Derived copies. Each consumes the URL and returns it unchanged when there
/// is nothing to change; otherwise the copy has an empty string cache.
impl Url {
    pub fn without_port(self) -> Self {
        if self.port.is_none() {
            return self;
        }
        Self {
            port: None,
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn with_port(self, port: PortNumber) -> Self {
        Self {
            port: Some(port),
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn with_credentials(self, user: impl Into<String>, password: Option<String>) -> Self {
        Self {
            user: Some(user.into()),
            password,
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn with_path(self, path: Path) -> Self {
        Self {
            path: Some(path),
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn with_query_string(self, query_string: QueryString) -> Self {
        Self {
            query_string: Some(query_string),
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn without_query_string(self) -> Self {
        if self.query_string.is_none() {
            return self;
        }
        Self {
            query_string: None,
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn with_fragment_identifier(self, fragment_identifier: FragmentIdentifier) -> Self {
        Self {
            fragment_identifier: Some(fragment_identifier),
            serialized: OnceLock::new(),
            ..self
        }
    }

    pub fn without_fragment_identifier(self) -> Self {
        if self.fragment_identifier.is_none() {
            return self;
        }
        Self {
            fragment_identifier: None,
            serialized: OnceLock::new(),
            ..self
        }
    }
}

impl Clone for Url {
    fn clone(&self) -> Self {
        Self {
            scheme: self.scheme.clone(),
            host: self.host.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            path: self.path.clone(),
            port: self.port,
            query_string: self.query_string.clone(),
            fragment_identifier: self.fragment_identifier.clone(),
            serialized: OnceLock::new(),
        }
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Url {}

impl core::hash::Hash for Url {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<UrlParts> for Url {
    type Error = ParseError;

    fn try_from(parts: UrlParts) -> Result<Self> {
        Self::from_parts(parts)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_string(&value).map_err(serde::de::Error::custom)
    }
}
