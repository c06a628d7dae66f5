pub mod use_auth;
pub mod use_entries;
pub mod use_route;

pub use use_auth::{use_auth, AuthProvider};
pub use use_entries::use_entries;
pub use use_route::{use_navigator, Route, RouteProvider};
