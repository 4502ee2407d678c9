use std::{ops::Deref, rc::Rc};

use dioxus::prelude::*;

use crate::client::{
    component::Shell,
    navigation::{RouteDef, RouteTable, RouteTableError},
    route::{About, AdminLogin, AdminSignUp, Home, Index, NotFound, SecretPage},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Index {},

    #[route("/home")]
    Home {},

    #[route("/about")]
    About {},

    #[route("/AdminSignUp")]
    AdminSignUp {},

    #[route("/AdminLogin")]
    AdminLogin {},

    #[route("/secretPage")]
    SecretPage {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Renderable handles referenced by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Shell,
    Home,
    About,
    AdminSignUp,
    AdminLogin,
    SecretPage,
}

/// Routing policy of the portal: which paths exist, which one the bare root
/// redirects to, and which ones sit behind the route guard.
pub fn route_table() -> Result<RouteTable<Screen>, RouteTableError> {
    RouteTable::new(vec![RouteDef::layout(
        "/",
        Screen::Shell,
        vec![
            RouteDef::index_redirect("/home"),
            RouteDef::page("/home", Screen::Home),
            RouteDef::page("/about", Screen::About),
            RouteDef::page("/AdminSignUp", Screen::AdminSignUp),
            RouteDef::page("/AdminLogin", Screen::AdminLogin),
            RouteDef::page("/secretPage", Screen::SecretPage).guarded(),
        ],
    )])
}

/// Route table shared through context.
#[derive(Clone)]
pub struct SharedRoutes(Rc<RouteTable<Screen>>);

impl SharedRoutes {
    pub fn new(table: RouteTable<Screen>) -> Self {
        Self(Rc::new(table))
    }
}

impl Deref for SharedRoutes {
    type Target = RouteTable<Screen>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SharedRoutes {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
