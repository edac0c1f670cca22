//! Validated, immutable URL value objects.
//!
//! A [`Url`] is assembled from typed components ([`Scheme`], [`Path`],
//! [`PortNumber`], [`QueryString`], [`FragmentIdentifier`]) plus raw host and
//! credential strings. Each component checks its own grammar when built, and
//! a URL parsed with [`Url::from_string`] serializes back to the exact input.
//!
//! ```
//! use url_value::{QueryValue, Url};
//!
//! let url = Url::from_string("http://www.example.com/a/../b?foo.bar=1&list[]=x").unwrap();
//! assert_eq!(url.to_string(), "http://www.example.com/a/../b?foo.bar=1&list[]=x");
//! assert_eq!(url.sub_domain(), "www");
//! assert!(url.contains_path_traversal());
//!
//! let params = url.query_string().unwrap().to_key_values();
//! assert_eq!(params["foo.bar"], QueryValue::from("1"));
//! ```

// Internal modules (not public API)
mod character_sets;
mod domain;
mod error;
mod fragment_identifier;
mod parser;
mod path;
mod percent_encode;
mod port_number;
mod query_string;
mod scheme;
mod string_valued;
mod url_aggregate;
mod url_parts;

// Public API
pub use domain::COUNTRY_SECOND_LEVEL_DOMAINS;
pub use error::{ParseError, Result};
pub use fragment_identifier::FragmentIdentifier;
pub use path::Path;
pub use port_number::PortNumber;
pub use query_string::{QueryString, QueryValue};
pub use scheme::{Scheme, SchemeType};
pub use string_valued::StringValued;
pub use url_aggregate::Url;
pub use url_parts::UrlParts;
