use super::*;

use crate::client::navigation::path::{normalize, parse_definition, segments};

/// Tests normalization of browser locations.
///
/// Verifies that query strings, fragments, duplicate slashes and trailing
/// slashes are ignored while segment case is preserved.
///
/// Expected: canonical absolute paths
#[test]
fn normalizes_locations() {
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize("/home/"), "/home");
    assert_eq!(normalize("//admin//login"), "/admin/login");
    assert_eq!(normalize("/secretPage?tab=1#top"), "/secretPage");
    assert_eq!(normalize("/AdminLogin"), "/AdminLogin");
}

/// Tests splitting a location into segments.
///
/// Expected: only non-empty segments before the query string
#[test]
fn splits_segments() {
    assert_eq!(segments("/a/b/"), vec!["a", "b"]);
    assert_eq!(segments("/?next=/home"), Vec::<&str>::new());
}

/// Tests parsing of route definition paths.
///
/// Verifies that absolute and relative paths parse, and that empty paths,
/// empty segments and query strings are rejected.
///
/// Expected: Some for well-formed definitions, None otherwise
#[test]
fn parses_definitions() {
    assert_eq!(parse_definition("/"), Some((true, vec![])));
    assert_eq!(
        parse_definition("/admin/login"),
        Some((true, vec!["admin".to_string(), "login".to_string()]))
    );
    assert_eq!(parse_definition("about"), Some((false, vec!["about".to_string()])));

    assert_eq!(parse_definition(""), None);
    assert_eq!(parse_definition("/a//b"), None);
    assert_eq!(parse_definition("/a?b=1"), None);
}

/// Tests that the portal table is unaffected by a trailing slash.
///
/// Expected: `/about/` resolves to the about page
#[test]
fn trailing_slash_matches() {
    let table = portal_table();

    assert!(matches!(
        table.resolve("/about/"),
        Resolution::Page { page: "about", .. }
    ));
}
