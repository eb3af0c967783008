pub mod auth;
pub mod dashboard;

pub use auth::*;
pub use dashboard::*;
