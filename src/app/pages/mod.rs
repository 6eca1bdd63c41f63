pub mod dashboard;
pub mod not_found;
pub mod routes;

pub use dashboard::{Dashboard, Metrics, Profile, Settings};
pub use not_found::NotFound;
pub use routes::{resolve_path, App, Route};
