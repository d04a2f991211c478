//! Snapshot of the browser location.

/// The parts of `window.location` the helpers read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Path, e.g. `/shop/cart`
    pub pathname: String,
    /// Query with leading `?`, or empty
    pub search: String,
    /// Fragment with leading `#`, or empty
    pub hash: String,
    /// Scheme, host and port, e.g. `https://m.example.com`
    pub origin: String,
}

impl Location {
    /// Path + query + fragment, concatenated as-is.
    pub fn full_path(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    /// Parse an absolute URL into its location parts.
    ///
    /// Only handles `scheme://host[:port]/path?query#hash`; used to keep
    /// mock navigation state consistent.
    pub fn from_href(href: &str) -> Self {
        let (rest, hash) = match href.find('#') {
            Some(i) => (&href[..i], href[i..].to_string()),
            None => (href, String::new()),
        };
        let (rest, search) = match rest.find('?') {
            Some(i) => (&rest[..i], rest[i..].to_string()),
            None => (rest, String::new()),
        };

        let (origin, pathname) = match rest.find("://") {
            Some(scheme_end) => {
                let after_scheme = scheme_end + 3;
                match rest[after_scheme..].find('/') {
                    Some(i) => (&rest[..after_scheme + i], &rest[after_scheme + i..]),
                    None => (rest, "/"),
                }
            }
            None => ("", rest),
        };

        Self {
            pathname: pathname.to_string(),
            search: if search == "?" { String::new() } else { search },
            hash: if hash == "#" { String::new() } else { hash },
            origin: origin.to_string(),
        }
    }
}

/// Concatenate path, query and fragment of a location.
pub fn full_path(location: &Location) -> String {
    location.full_path()
}
