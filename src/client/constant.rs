pub const SITE_NAME: &str = "Late Slip Portal";

pub const HOME_PATH: &str = "/home";
pub const LOGIN_PATH: &str = "/AdminLogin";

/// Redirects followed within one navigation before giving up.
pub const MAX_REDIRECTS: usize = 8;
