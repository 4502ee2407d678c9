pub mod about;
pub mod admin_login;
pub mod admin_signup;
pub mod home;
pub mod index;
pub mod not_found;
pub mod secret_page;

pub use about::About;
pub use admin_login::AdminLogin;
pub use admin_signup::AdminSignUp;
pub use home::Home;
pub use index::Index;
pub use not_found::NotFound;
pub use secret_page::SecretPage;
