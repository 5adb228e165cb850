//! Fair Rent API Module
//! REST API over the fair-rent analysis core

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
