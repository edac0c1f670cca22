use std::collections::BTreeMap;

use crate::character_sets::is_query_byte;
use crate::error::{ParseError, Result};
use crate::percent_encode::{form_decode, form_encode_into};
use crate::string_valued::impl_string_valued;

/// A decoded query parameter value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryValue {
    Single(String),
    /// Values accumulated from repeated `key[]=...` pairs, in order
    List(Vec<String>),
}

impl QueryValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_owned).collect())
    }
}

/// The query component of a URL, always stored with exactly one leading `?`.
///
/// The text after the `?` is a run of `key[=value]` pairs drawn from word
/// characters and `.-[]~&%+?`; a bare `?` holds no pairs.
///
/// ```
/// use url_value::{QueryString, QueryValue, StringValued};
///
/// let query = QueryString::new("foo.bar=baz&list[]=1&list[]=2").unwrap();
/// assert_eq!(query.as_str(), "?foo.bar=baz&list[]=1&list[]=2");
///
/// let params = query.to_key_values();
/// assert_eq!(params["foo.bar"], QueryValue::from("baz"));
/// assert_eq!(params["list"], QueryValue::from(vec!["1", "2"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryString {
    value: String,
}

impl QueryString {
    /// Normalize to a single leading `?` and validate the pair grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidQueryString`] if the text contains a
    /// character outside the allowed class, starts with `=`, or has an `=`
    /// directly after another `=`.
    pub fn new(value: &str) -> Result<Self> {
        let body = value.trim_start_matches('?');
        if !is_valid_query_body(body) {
            return Err(ParseError::InvalidQueryString);
        }

        let mut normalized = String::with_capacity(body.len() + 1);
        normalized.push('?');
        normalized.push_str(body);
        Ok(Self { value: normalized })
    }

    /// Build a query string from key/value pairs, form-urlencoding each key
    /// and value. List values are emitted as repeated `key[]=value` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidQueryString`] if the encoded result does
    /// not satisfy the grammar, which happens for an empty leading key.
    pub fn from_key_values<I, K, V>(parameters: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<QueryValue>,
    {
        let mut buffer = String::from("?");
        for (key, value) in parameters {
            match value.into() {
                QueryValue::Single(value) => push_pair(&mut buffer, key.as_ref(), "", &value),
                QueryValue::List(values) => {
                    for value in &values {
                        push_pair(&mut buffer, key.as_ref(), "[]", value);
                    }
                }
            }
        }
        Self::new(&buffer)
    }

    /// Decode into a key/value mapping.
    ///
    /// Keys are percent-decoded as written: dots, spaces and any other
    /// characters survive unchanged. A literal `[]` key suffix collects the
    /// values of all such pairs into a [`QueryValue::List`] under the base
    /// key. Otherwise the last occurrence of a key wins.
    pub fn to_key_values(&self) -> BTreeMap<String, QueryValue> {
        let mut parameters = BTreeMap::new();

        for (raw_key, raw_value) in self.pairs() {
            let value = form_decode(raw_value);

            let (key, is_list) = match raw_key.strip_suffix("[]") {
                Some(base) if !base.contains('[') => (form_decode(base), true),
                _ => (form_decode(raw_key), false),
            };
            if key.is_empty() {
                continue;
            }

            if !is_list {
                parameters.insert(key, QueryValue::Single(value));
                continue;
            }

            match parameters.get_mut(&key) {
                Some(QueryValue::List(values)) => values.push(value),
                _ => {
                    parameters.insert(key, QueryValue::List(vec![value]));
                }
            }
        }

        parameters
    }

    /// Append one `key=value` pair. Existing pairs with the same key are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidQueryString`] if `key` is empty and the
    /// query holds no pairs yet.
    pub fn with_added_parameter(&self, key: &str, value: &str) -> Result<Self> {
        let mut buffer = self.value.clone();
        push_pair(&mut buffer, key, "", value);
        Self::new(&buffer)
    }

    /// Iterate over the raw, still-encoded `(key, value)` pairs.
    /// A pair without `=` yields an empty value.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.value[1..]
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
    }

    /// Check if the query holds no pairs (`?` alone)
    pub fn is_empty(&self) -> bool {
        self.value.len() == 1
    }
}

impl_string_valued!(QueryString);

/// Append `key<suffix>=value` to a buffer that starts with `?`
fn push_pair(buffer: &mut String, key: &str, suffix: &str, value: &str) {
    if buffer.len() > 1 {
        buffer.push('&');
    }
    form_encode_into(buffer, key);
    buffer.push_str(suffix);
    buffer.push('=');
    form_encode_into(buffer, value);
}

/// Every byte is a pair character or `=`, and each `=` follows a pair
/// character.
fn is_valid_query_body(body: &str) -> bool {
    let mut after_pair_byte = false;
    for &b in body.as_bytes() {
        if b == b'=' {
            if !after_pair_byte {
                return false;
            }
            after_pair_byte = false;
        } else if is_query_byte(b) {
            after_pair_byte = true;
        } else {
            return false;
        }
    }
    true
}
