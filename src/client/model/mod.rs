pub mod auth;
pub mod directory;
