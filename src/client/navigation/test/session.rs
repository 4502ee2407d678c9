use super::*;

/// Tests login and logout transitions.
///
/// Expected: Authorized with the user after login, Unauthorized after logout
#[test]
fn login_and_logout() {
    let mut store = AuthStore::new();
    assert_eq!(store.status(), AuthStatus::Unauthorized);

    store.login("admin@college.edu");
    assert_eq!(store.status(), AuthStatus::Authorized);
    assert_eq!(store.user(), Some(&"admin@college.edu"));

    store.logout();
    assert_eq!(store.status(), AuthStatus::Unauthorized);
    assert_eq!(store.user(), None);
}

/// Tests that a current check settles the store.
///
/// Expected: Ok(Authorized) for a user, Ok(Unauthorized) for none
#[test]
fn current_check_settles() {
    let mut store = AuthStore::new();

    let ticket = store.begin_check(1);
    assert_eq!(store.state(), &SessionState::Checking);
    assert_eq!(
        store.complete_check(ticket, 1, Some("admin")),
        Ok(AuthStatus::Authorized)
    );

    let ticket = store.begin_check(2);
    assert_eq!(
        store.complete_check(ticket, 2, None),
        Ok(AuthStatus::Unauthorized)
    );
}

/// Tests that a check superseded by a newer navigation is ignored.
///
/// Expected: Err(StaleCheck) and the store still checking
#[test]
fn newer_navigation_wins() {
    let mut store = AuthStore::new();

    let ticket = store.begin_check(1);
    assert_eq!(ticket.generation(), 1);
    assert_eq!(
        store.complete_check(ticket, 2, Some("admin")),
        Err(StaleCheck)
    );
    assert_eq!(store.status(), AuthStatus::Pending);
}

/// Tests that a newer check invalidates an older one.
///
/// Expected: Err(StaleCheck) for the first ticket, Ok for the second
#[test]
fn newer_check_wins() {
    let mut store = AuthStore::new();

    let first = store.begin_check(1);
    let second = store.begin_check(1);

    assert_eq!(store.complete_check(first, 1, Some("old")), Err(StaleCheck));
    assert_eq!(
        store.complete_check(second, 1, None),
        Ok(AuthStatus::Unauthorized)
    );
}

/// Tests that a logout during a check invalidates it.
///
/// Verifies that a slow check cannot log the visitor back in after they
/// logged out.
///
/// Expected: Err(StaleCheck), visitor stays anonymous
#[test]
fn logout_invalidates_in_flight_check() {
    let mut store = AuthStore::new();

    let ticket = store.begin_check(1);
    let epoch = store.epoch();
    store.logout();
    assert!(store.epoch() > epoch);

    assert_eq!(store.complete_check(ticket, 1, Some("admin")), Err(StaleCheck));
    assert_eq!(store.status(), AuthStatus::Unauthorized);
}
