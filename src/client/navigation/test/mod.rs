use super::*;

mod decide;
mod history;
mod path;
mod session;

/// Route definitions of the admin portal, with string handles standing in
/// for components.
fn portal_routes() -> Vec<RouteDef<&'static str>> {
    vec![RouteDef::layout(
        "/",
        "shell",
        vec![
            RouteDef::index_redirect("/home"),
            RouteDef::page("/home", "home"),
            RouteDef::page("/about", "about"),
            RouteDef::page("/AdminSignUp", "signup"),
            RouteDef::page("/AdminLogin", "login"),
            RouteDef::page("/secretPage", "secret").guarded(),
        ],
    )]
}

fn portal_table() -> RouteTable<&'static str> {
    RouteTable::new(portal_routes()).expect("portal routes are valid")
}

fn portal_navigator() -> Navigator<&'static str> {
    Navigator::new(portal_table(), NavigatorConfig::default()).expect("portal config is valid")
}

fn page(name: &'static str) -> View<&'static str> {
    View::Page {
        page: name,
        layouts: vec!["shell"],
    }
}
