use crate::error::{ParseError, Result};
use crate::url_parts::UrlParts;

/// Prune fragment (#hash) from URL string.
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a URL string that has no fragment.
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split `userinfo@host:port` into its parts
fn split_authority(authority: &str) -> Result<(Option<&str>, Option<&str>, &str, Option<&str>)> {
    let (userinfo, host_port) = match memchr::memrchr(b'@', authority.as_bytes()) {
        Some(pos) => (Some(&authority[..pos]), &authority[pos + 1..]),
        None => (None, authority),
    };

    let (user, password) = match userinfo {
        Some(userinfo) => match userinfo.split_once(':') {
            Some((user, password)) => (Some(user), Some(password)),
            None => (Some(userinfo), None),
        },
        None => (None, None),
    };

    // Only look for the port separator after an IPv6 literal
    let search_from = memchr::memrchr(b']', host_port.as_bytes()).map_or(0, |pos| pos + 1);
    let (host, port) = match memchr::memrchr(b':', &host_port.as_bytes()[search_from..]) {
        Some(pos) => {
            let pos = search_from + pos;
            (&host_port[..pos], Some(&host_port[pos + 1..]))
        }
        None => (host_port, None),
    };

    Ok((user, password, host, port.map(check_port_digits).transpose()?))
}

/// A port must be written the way `PortNumber` prints it so that the URL
/// reassembles to the exact same text.
fn check_port_digits(port: &str) -> Result<&str> {
    let canonical = !port.is_empty()
        && port.bytes().all(|b| b.is_ascii_digit())
        && (port == "0" || !port.starts_with('0'));
    if canonical {
        Ok(port)
    } else {
        Err(ParseError::InvalidUrl(None))
    }
}

/// Split an absolute `scheme://authority[path][?query][#fragment]` string
/// into its literal parts without normalizing any of them.
///
/// A present-but-empty query (`?`) or fragment (`#`) is kept as `Some("")`
/// so the parts reassemble to the input.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUrl`] if there is no `scheme://` prefix, the
/// port is not a canonical decimal number, the authority holds a `\`, or the
/// query or fragment body begins with a second `?` or `#`.
pub fn split_url(input: &str) -> Result<UrlParts> {
    let (rest, fragment) = prune_fragment(input);
    let (rest, query) = prune_query(rest);

    // The component constructors trim these, which would lose input text
    if query.is_some_and(|query| query.starts_with('?'))
        || fragment.is_some_and(|fragment| fragment.starts_with('#'))
    {
        return Err(ParseError::InvalidUrl(None));
    }

    let colon = memchr::memchr(b':', rest.as_bytes()).ok_or(ParseError::InvalidUrl(None))?;
    let scheme = &rest[..colon];
    let hierarchical = rest[colon + 1..]
        .strip_prefix("//")
        .ok_or(ParseError::InvalidUrl(None))?;

    let authority_end = memchr::memchr(b'/', hierarchical.as_bytes()).unwrap_or(hierarchical.len());
    let (authority, path) = hierarchical.split_at(authority_end);
    // WHATWG parsers end the authority at `\` too; never guess which host was meant
    if memchr::memchr(b'\\', authority.as_bytes()).is_some() {
        return Err(ParseError::InvalidUrl(None));
    }
    let (user, password, host, port) = split_authority(authority)?;

    let port = port
        .map(str::parse::<i64>)
        .transpose()
        .map_err(|_| ParseError::InvalidUrl(None))?;

    Ok(UrlParts {
        scheme: Some(scheme.to_owned()),
        host: Some(host.to_owned()),
        user: user.map(str::to_owned),
        password: password.map(str::to_owned),
        path: (!path.is_empty()).then(|| path.to_owned()),
        port,
        query: query.map(str::to_owned),
        fragment: fragment.map(str::to_owned),
    })
}
