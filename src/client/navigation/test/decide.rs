use super::*;

/// Tests that unguarded routes render regardless of auth state.
///
/// Expected: Render for every unguarded page with every status, including no predicate
#[test]
fn unguarded_routes_ignore_auth() {
    let table = portal_table();
    let guard = RouteGuard::new("/AdminLogin");

    for location in ["/home", "/about", "/AdminSignUp", "/AdminLogin"] {
        for auth in [
            None,
            Some(AuthStatus::Authorized),
            Some(AuthStatus::Unauthorized),
            Some(AuthStatus::Pending),
        ] {
            let decision = table.decide(
                location,
                &guard,
                auth.as_ref().map(|s| s as &dyn AuthPredicate),
            );
            assert!(
                matches!(decision, Decision::Render { .. }),
                "{location} with {auth:?} gave {decision:?}"
            );
        }
    }
}

/// Tests the protected route under each auth status.
///
/// Expected: Render when authorized, Unauthorized redirect otherwise, Pending while checking
#[test]
fn protected_route_follows_guard() {
    let table = portal_table();
    let guard = RouteGuard::new("/AdminLogin");

    assert_eq!(
        table.decide("/secretPage", &guard, Some(&true)),
        Decision::Render {
            path: "/secretPage".to_string(),
            page: "secret",
            layouts: vec!["shell"],
        }
    );
    assert_eq!(
        table.decide("/secretPage", &guard, Some(&false)),
        Decision::Redirect {
            to: "/AdminLogin".to_string(),
            reason: RedirectReason::Unauthorized {
                return_to: "/secretPage".to_string()
            },
        }
    );
    assert_eq!(
        table.decide("/secretPage", &guard, Some(&AuthStatus::Pending)),
        Decision::Pending {
            path: "/secretPage".to_string(),
            layouts: vec!["shell"],
        }
    );
}

/// Tests the root canonicalization and the not-found decision.
///
/// Expected: Canonical redirect for `/`, NotFound for `/xyz`
#[test]
fn root_redirects_and_unknown_is_not_found() {
    let table = portal_table();
    let guard = RouteGuard::new("/AdminLogin");

    assert_eq!(
        table.decide("/", &guard, None),
        Decision::Redirect {
            to: "/home".to_string(),
            reason: RedirectReason::Canonical,
        }
    );
    assert_eq!(
        table.decide("/xyz", &guard, None),
        Decision::NotFound {
            path: "/xyz".to_string()
        }
    );
}

/// Tests a guarded redirect entry for each auth status.
///
/// The redirect must not fire for a visitor the guard refuses, and a missing
/// predicate is treated as refused.
///
/// Expected: Unauthorized redirect to `/AdminLogin` when refused or unknown,
/// Pending while checking, Canonical redirect to `/home` when authorized
#[test]
fn guarded_redirect_follows_guard() -> Result<(), RouteTableError> {
    let table = RouteTable::new(vec![
        RouteDef::page("/home", "home"),
        RouteDef::page("/AdminLogin", "login"),
        RouteDef::redirect("/oldSecret", "/home").guarded(),
    ])?;
    let guard = RouteGuard::new("/AdminLogin");
    let refused = Decision::Redirect {
        to: "/AdminLogin".to_string(),
        reason: RedirectReason::Unauthorized {
            return_to: "/oldSecret".to_string(),
        },
    };

    assert_eq!(table.decide("/oldSecret", &guard, Some(&false)), refused);
    assert_eq!(table.decide("/oldSecret", &guard, None), refused);
    assert_eq!(
        table.decide("/oldSecret", &guard, Some(&AuthStatus::Pending)),
        Decision::Pending {
            path: "/oldSecret".to_string(),
            layouts: vec![],
        }
    );
    assert_eq!(
        table.decide("/oldSecret", &guard, Some(&true)),
        Decision::Redirect {
            to: "/home".to_string(),
            reason: RedirectReason::Canonical,
        }
    );

    Ok(())
}

/// Tests the index redirect of a guarded layout for an anonymous navigation.
///
/// Expected: the visitor lands on `/AdminLogin`, not on the redirect target
#[test]
fn guarded_layout_index_redirect_is_refused() -> Result<(), NavigationError> {
    let table = RouteTable::new(vec![
        RouteDef::page("/home", "home"),
        RouteDef::page("/AdminLogin", "login"),
        RouteDef::layout(
            "/admin",
            "admin-shell",
            vec![
                RouteDef::index_redirect("/admin/users"),
                RouteDef::page("users", "users"),
            ],
        )
        .guarded(),
    ])
    .expect("routes are valid");
    let mut navigator = Navigator::new(table, NavigatorConfig::default())?;

    let outcome = navigator.navigate("/admin", Some(&false))?;
    assert_eq!(outcome.location, "/AdminLogin");
    assert_eq!(navigator.return_to(), Some("/admin"));

    let outcome = navigator.complete_login(Some(&true))?;
    assert_eq!(outcome.location, "/admin/users");

    Ok(())
}

/// Tests that the refused location keeps its query string and fragment.
///
/// Expected: Unauthorized redirect remembering `/secretPage?tab=2#top`
#[test]
fn refusal_keeps_query() {
    let table = portal_table();
    let guard = RouteGuard::new("/AdminLogin");

    assert_eq!(
        table.decide("/secretPage?tab=2#top", &guard, Some(&false)),
        Decision::Redirect {
            to: "/AdminLogin".to_string(),
            reason: RedirectReason::Unauthorized {
                return_to: "/secretPage?tab=2#top".to_string()
            },
        }
    );
}
