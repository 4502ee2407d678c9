use dioxus_logger::tracing;

use crate::client::{
    constant::{HOME_PATH, LOGIN_PATH, MAX_REDIRECTS},
    navigation::{
        decision::{Decision, RedirectReason},
        error::NavigationError,
        guard::{AuthPredicate, RouteGuard},
        history::History,
        path::{normalize, suffix},
        resolve::Resolution,
        table::RouteTable,
    },
};

/// Navigation settings shared by the navigator and the rendered shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Where the route guard sends unauthorized visitors.
    pub login_path: String,
    /// Where a successful login lands when no refused location is remembered.
    pub home_path: String,
    /// Upper bound on chained redirects within one navigation.
    pub max_redirects: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_string(),
            home_path: HOME_PATH.to_string(),
            max_redirects: MAX_REDIRECTS,
        }
    }
}

impl NavigatorConfig {
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    pub fn with_max_redirects(mut self, limit: usize) -> Self {
        self.max_redirects = limit;
        self
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.login_path.clone())
    }

    /// Checks that the configured paths make sense for `table`.
    ///
    /// The login path must render an unguarded page, otherwise an
    /// unauthorized visitor would loop or see a blank view. The home path
    /// must resolve to something.
    pub fn validate<P: Clone>(&self, table: &RouteTable<P>) -> Result<(), NavigationError> {
        match table.resolve(&self.login_path) {
            Resolution::Page { guarded: false, .. } => {}
            _ => return Err(NavigationError::LoginUnreachable(self.login_path.clone())),
        }

        if let Resolution::NotFound { .. } = table.resolve(&self.home_path) {
            return Err(NavigationError::HomeUnreachable(self.home_path.clone()));
        }

        Ok(())
    }
}

/// What ends up on screen after a navigation settles.
#[derive(Debug, Clone, PartialEq)]
pub enum View<P> {
    Page { page: P, layouts: Vec<P> },
    Pending { layouts: Vec<P> },
    NotFound,
}

/// Settled navigation: the visible location and what it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<P> {
    pub location: String,
    pub view: View<P>,
}

/// Drives route resolution, guard evaluation and redirects against a history.
///
/// Every navigation takes the auth predicate explicitly, so the same input
/// always settles on the same outcome. Redirects replace the current entry.
/// A navigation that fails leaves history and the remembered location as
/// they were before it started.
#[derive(Debug)]
pub struct Navigator<P> {
    table: RouteTable<P>,
    config: NavigatorConfig,
    guard: RouteGuard,
    history: History,
    generation: u64,
    return_to: Option<String>,
}

impl<P: Clone> Navigator<P> {
    pub fn new(table: RouteTable<P>, config: NavigatorConfig) -> Result<Self, NavigationError> {
        config.validate(&table)?;

        Ok(Self {
            guard: config.guard(),
            table,
            config,
            history: History::new(),
            generation: 0,
            return_to: None,
        })
    }

    /// Pushes `location` and settles it.
    pub fn navigate(
        &mut self,
        location: &str,
        auth: Option<&dyn AuthPredicate>,
    ) -> Result<Outcome<P>, NavigationError> {
        tracing::debug!("Navigating to '{}'", location);

        self.atomically(|nav| {
            nav.history.push(location);
            nav.settle(auth)
        })
    }

    /// Replaces the current entry with `location` and settles it.
    pub fn replace(
        &mut self,
        location: &str,
        auth: Option<&dyn AuthPredicate>,
    ) -> Result<Outcome<P>, NavigationError> {
        self.atomically(|nav| {
            nav.history.replace(location);
            nav.settle(auth)
        })
    }

    /// Steps back one entry. `Ok(None)` when already at the first entry.
    pub fn back(
        &mut self,
        auth: Option<&dyn AuthPredicate>,
    ) -> Result<Option<Outcome<P>>, NavigationError> {
        if self.history.is_empty() {
            return Err(NavigationError::NoLocation);
        }

        self.atomically(|nav| {
            if nav.history.back().is_none() {
                return Ok(None);
            }
            nav.settle(auth).map(Some)
        })
    }

    /// Steps forward one entry. `Ok(None)` when already at the last entry.
    pub fn forward(
        &mut self,
        auth: Option<&dyn AuthPredicate>,
    ) -> Result<Option<Outcome<P>>, NavigationError> {
        if self.history.is_empty() {
            return Err(NavigationError::NoLocation);
        }

        self.atomically(|nav| {
            if nav.history.forward().is_none() {
                return Ok(None);
            }
            nav.settle(auth).map(Some)
        })
    }

    /// Re-evaluates the current location, e.g. after a logout or once a
    /// pending auth check settles.
    pub fn refresh(
        &mut self,
        auth: Option<&dyn AuthPredicate>,
    ) -> Result<Outcome<P>, NavigationError> {
        if self.history.is_empty() {
            return Err(NavigationError::NoLocation);
        }

        self.atomically(|nav| nav.settle(auth))
    }

    /// Sends a freshly logged-in visitor back to the location the guard
    /// refused, or to the home path when none is remembered.
    pub fn complete_login(
        &mut self,
        auth: Option<&dyn AuthPredicate>,
    ) -> Result<Outcome<P>, NavigationError> {
        self.atomically(|nav| {
            let target = nav
                .return_to
                .take()
                .unwrap_or_else(|| nav.config.home_path.clone());

            tracing::info!("Login complete, continuing to '{}'", target);
            nav.history.replace(target);
            nav.settle(auth)
        })
    }

    pub fn location(&self) -> Option<&str> {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn return_to(&self) -> Option<&str> {
        self.return_to.as_deref()
    }

    /// Counter bumped on every navigation. Async auth checks carry it so a
    /// result from an older navigation can be told apart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs `step`, restoring history, the remembered location and the
    /// generation when it fails.
    fn atomically<T>(
        &mut self,
        step: impl FnOnce(&mut Self) -> Result<T, NavigationError>,
    ) -> Result<T, NavigationError> {
        let history = self.history.clone();
        let return_to = self.return_to.clone();
        let generation = self.generation;

        let result = step(self);
        if let Err(e) = &result {
            tracing::warn!("Navigation failed, keeping previous location: {}", e);
            self.history = history;
            self.return_to = return_to;
            self.generation = generation;
        }

        result
    }

    fn settle(&mut self, auth: Option<&dyn AuthPredicate>) -> Result<Outcome<P>, NavigationError> {
        self.generation += 1;
        let mut redirects = 0;

        loop {
            let location = self
                .history
                .current()
                .ok_or(NavigationError::NoLocation)?
                .to_string();

            let (to, reason) = match self.table.decide(&location, &self.guard, auth) {
                Decision::Render { path, page, layouts } => {
                    return Ok(self.outcome(&path, &location, View::Page { page, layouts }));
                }
                Decision::Pending { path, layouts } => {
                    return Ok(self.outcome(&path, &location, View::Pending { layouts }));
                }
                Decision::NotFound { path } => {
                    tracing::debug!("No route matches '{}'", path);
                    return Ok(self.outcome(&path, &location, View::NotFound));
                }
                Decision::Redirect { to, reason } => (to, reason),
            };

            redirects += 1;
            if redirects > self.config.max_redirects {
                return Err(NavigationError::RedirectLoop {
                    path: location,
                    limit: self.config.max_redirects,
                });
            }

            if let RedirectReason::Unauthorized { return_to } = reason {
                self.return_to = Some(return_to);
            }
            self.history.replace(to);
        }
    }

    fn outcome(&mut self, path: &str, location: &str, view: View<P>) -> Outcome<P> {
        // Keep the visible path canonical (`/home/` becomes `/home`), query and fragment untouched
        let visible = format!("{}{}", path, suffix(location));
        self.history.replace(visible.clone());

        // A refused location only survives the trip to the login page
        if self.return_to.is_some() && path != normalize(&self.config.login_path) {
            tracing::debug!("Forgetting refused location on '{}'", path);
            self.return_to = None;
        }

        Outcome {
            location: visible,
            view,
        }
    }
}
