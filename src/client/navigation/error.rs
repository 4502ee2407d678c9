use thiserror::Error;

/// Route table construction failure.
///
/// Raised by `RouteTable::new` so that a malformed table is rejected at startup
/// instead of silently picking one of two conflicting entries at navigation time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// More than one index entry was declared in the same scope.
    ///
    /// # Fields
    /// - Full path of the scope owning the duplicate index entries
    #[error("Duplicate index route under '{0}'")]
    DuplicateIndex(String),

    /// Two render targets resolve to the same full path.
    ///
    /// # Fields
    /// - The colliding full path
    #[error("Path collision on '{0}'")]
    PathCollision(String),

    /// A path definition is empty or contains an empty segment.
    #[error("Invalid route path '{0}'")]
    InvalidPath(String),

    /// An absolute child path does not start with its parent's path.
    #[error("Route '{path}' is outside of its parent '{parent}'")]
    OutsideParent { path: String, parent: String },

    /// An index entry was declared as a layout.
    ///
    /// Index entries match the parent path with no further segment, so they
    /// cannot own children of their own.
    #[error("Index route under '{0}' cannot be a layout")]
    IndexLayout(String),

    /// A redirect target is not an absolute path.
    #[error("Redirect from '{from}' has a non-absolute target '{to}'")]
    InvalidRedirect { from: String, to: String },

    /// A redirect target does not resolve to any route.
    #[error("Redirect from '{from}' points at unmatched '{to}'")]
    DanglingRedirect { from: String, to: String },

    /// Following redirects from this path comes back to a path already visited.
    ///
    /// # Fields
    /// - Path of the redirect entry the cycle was found from
    #[error("Redirect cycle starting at '{0}'")]
    RedirectCycle(String),
}

/// Navigation failure raised by the `Navigator`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Redirects kept chaining past the configured limit.
    ///
    /// # Fields
    /// - `path`: Location reached when the limit was hit
    /// - `limit`: Configured maximum number of redirects per navigation
    #[error("Redirect loop detected at '{path}' after {limit} redirects")]
    RedirectLoop { path: String, limit: usize },

    /// The login path cannot render the login page.
    ///
    /// It is unmatched, guarded, or a redirect. An unauthorized visitor would
    /// either loop or land on a blank view.
    #[error("Login path '{0}' does not resolve to an unguarded page")]
    LoginUnreachable(String),

    /// The home path does not resolve to any route.
    #[error("Home path '{0}' does not resolve to a route")]
    HomeUnreachable(String),

    /// `back`/`forward` was requested before any navigation happened.
    #[error("No location has been visited yet")]
    NoLocation,
}

/// An asynchronous auth check finished after it was superseded by a newer
/// navigation or a login/logout, so its result was discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Auth check was superseded")]
pub struct StaleCheck;
