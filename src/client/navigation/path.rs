//! Location normalization shared by route table construction and resolution.

/// Returns the canonical form of a location.
///
/// The query string and fragment are dropped, empty segments are collapsed and
/// the trailing slash is removed. Segments keep their case: `/AdminLogin` and
/// `/adminlogin` are different locations.
pub fn normalize(location: &str) -> String {
    let segments = segments(location);
    if segments.is_empty() {
        return "/".to_string();
    }

    let mut path = String::with_capacity(location.len());
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// Splits a location into its non-empty path segments.
pub fn segments(location: &str) -> Vec<&str> {
    let end = location.find(['?', '#']).unwrap_or(location.len());

    location[..end]
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Returns the query string and fragment of a location, `?` or `#` included.
pub fn suffix(location: &str) -> &str {
    location.find(['?', '#']).map_or("", |start| &location[start..])
}

/// Joins segments back into an absolute path.
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }

    segments.iter().fold(String::new(), |mut path, segment| {
        path.push('/');
        path.push_str(segment.as_ref());
        path
    })
}

/// Parses a path as written in a route definition.
///
/// Returns whether it is absolute and its segments. Unlike [`segments`], an
/// empty segment (`/a//b`), a query string or a fragment is rejected, since a
/// definition is not a browser location. `None` marks an invalid definition.
pub fn parse_definition(path: &str) -> Option<(bool, Vec<String>)> {
    if path.is_empty() || path.contains(['?', '#']) {
        return None;
    }

    let absolute = path.starts_with('/');
    let body = path.strip_prefix('/').unwrap_or(path);
    let body = body.strip_suffix('/').unwrap_or(body);

    if body.is_empty() {
        return absolute.then(|| (true, Vec::new()));
    }

    let mut segments = Vec::new();
    for segment in body.split('/') {
        if segment.is_empty() {
            return None;
        }
        segments.push(segment.to_string());
    }

    Some((absolute, segments))
}
