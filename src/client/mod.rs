//! Browser-side portal: route table, route guard, shell and pages.
//!
//! - **Navigation** (`navigation/`) - Renderer-independent routing and guard logic
//! - **Router** (`router`) - Rendered route enum and the portal's route table
//! - **Components** (`component/`) - Shell chrome and the route gate
//! - **Routes** (`route/`) - One component per page
//! - **Model** (`model/`) - Auth session and admin directory contexts

pub mod app;
pub mod component;
pub mod constant;
pub mod model;
pub mod navigation;
pub mod route;
pub mod router;

pub use app::App;
