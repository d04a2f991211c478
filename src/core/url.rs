//! URL and path string helpers.

/// Extract the query string from a hash-router fragment.
///
/// `hash` is `location.hash` (e.g. `#/orders?id=7`). Returns the query with
/// its leading `?`, or an empty string when there is no query or it is empty.
/// The query is returned as written, without percent-encoding.
pub fn hash_router_query_string(hash: &str) -> String {
    let route = hash.strip_prefix('#').unwrap_or(hash);

    // Anything after a second '#' is the route's own fragment
    let route = route.split_once('#').map_or(route, |(before, _)| before);

    match route.split_once('?') {
        Some((_, query)) if !query.is_empty() => format!("?{}", query),
        _ => String::new(),
    }
}

/// Append a trailing `/` unless one is already present.
pub fn ensure_tail_has_slash(s: &str) -> String {
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{}/", s)
    }
}

/// Strip exactly one leading `/` if present.
pub fn ensure_capital_has_not_slash(s: &str) -> &str {
    s.strip_prefix('/').unwrap_or(s)
}
