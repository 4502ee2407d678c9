pub mod footer;
pub mod header;
pub mod layout;
pub mod page;
pub mod route_gate;

pub use footer::Footer;
pub use header::Header;
pub use layout::Shell;
pub use page::{ErrorPage, LoadingPage, Page};
pub use route_gate::RouteGate;
