use super::*;

/// Tests that pushing appends and drops forward entries.
///
/// Expected: forward entry discarded after a push from the middle
#[test]
fn push_truncates_forward_entries() {
    let mut history = History::new();
    history.push("/home");
    history.push("/about");
    history.push("/AdminLogin");

    assert_eq!(history.back(), Some("/about"));
    history.push("/AdminSignUp");

    assert_eq!(history.entries(), ["/home", "/about", "/AdminSignUp"]);
    assert_eq!(history.forward(), None);
}

/// Tests that replacing overwrites the current entry.
///
/// Expected: replaced location unreachable with back
#[test]
fn replace_overwrites_current_entry() {
    let mut history = History::new();
    history.push("/home");
    history.push("/secretPage");
    history.replace("/AdminLogin");

    assert_eq!(history.len(), 2);
    assert_eq!(history.current(), Some("/AdminLogin"));
    assert_eq!(history.back(), Some("/home"));
    assert_eq!(history.back(), None);
    assert_eq!(history.forward(), Some("/AdminLogin"));
}

/// Tests replace and navigation on an empty history.
///
/// Expected: replace creates the first entry, back/forward return None
#[test]
fn empty_history() {
    let mut history = History::new();
    assert!(history.is_empty());
    assert_eq!(history.back(), None);
    assert_eq!(history.forward(), None);

    history.replace("/home");
    assert_eq!(history.entries(), ["/home"]);
}
