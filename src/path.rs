use crate::error::{ParseError, Result};
use crate::string_valued::impl_string_valued;

/// The path component of a URL, exactly as a URL splitter extracts it.
///
/// A path is either empty or starts with a single `/`, and never contains the
/// `?` or `#` delimiters that would end it inside a full URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    value: String,
}

impl Path {
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPath`] if `value` is not a bare path, for
    /// example a full URL, a network-path reference (`//host/...`), or a
    /// string containing a query, fragment or control character.
    pub fn new(value: &str) -> Result<Self> {
        if !is_bare_path(value) {
            return Err(ParseError::InvalidPath);
        }

        Ok(Self {
            value: value.to_owned(),
        })
    }

    /// Check if `.` or `..` appears as a whole segment.
    ///
    /// `/foo/../bar` and `/.` contain a traversal, `/foo../bar` does not.
    pub fn contains_traversal(&self) -> bool {
        self.segments().any(|segment| segment == "." || segment == "..")
    }

    /// Iterate over the `/`-separated segments, without the leading empty one
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.value.split('/').skip(1)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

fn is_bare_path(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let bytes = value.as_bytes();
    if bytes[0] != b'/' || bytes.get(1) == Some(&b'/') {
        return false;
    }

    !bytes
        .iter()
        .any(|&b| b == b'?' || b == b'#' || b.is_ascii_control())
}

impl_string_valued!(Path);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bare_paths() {
        for input in ["", "/", "/foo", "/foo/bar/", "/foo;bar", "/%20x", "/a:b@c"] {
            assert!(Path::new(input).is_ok(), "{input}");
        }
    }

    #[test]
    fn test_rejects_non_paths() {
        for input in [
            "http://example.com/foo",
            "//example.com/foo",
            "foo/bar",
            "/foo?bar",
            "/foo#bar",
            "/foo\nbar",
        ] {
            assert_eq!(Path::new(input), Err(ParseError::InvalidPath), "{input}");
        }
    }

    #[test]
    fn test_contains_traversal() {
        for input in ["/../foo", "/foo/..", "/foo/../bar", "/.", "/./foo", "/foo/."] {
            assert!(Path::new(input).unwrap().contains_traversal(), "{input}");
        }
    }

    #[test]
    fn test_does_not_contain_traversal() {
        for input in ["", "/", "/foo../bar", "/foo/bar", "/foo.bar/baz", "/...", "/.foo"] {
            assert!(!Path::new(input).unwrap().contains_traversal(), "{input}");
        }
    }

    #[test]
    fn test_segments() {
        let path = Path::new("/foo/bar/").unwrap();
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["foo", "bar", ""]);
        assert_eq!(Path::new("").unwrap().segments().count(), 0);
    }
}
