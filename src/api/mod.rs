//! API layer - HTTP endpoints and middleware

pub mod dispatch;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod types;

pub use router::create_router;
pub use routes::RouteTable;
pub use state::AppState;
