//! API layer - pages, JSON endpoints, health checks and the launcher redirect

pub mod health;
pub mod middleware;
pub mod pages;
pub mod redirect;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

pub use redirect::{create_redirect_router, RedirectState};
pub use router::{create_router, MetricsEndpoint};
pub use state::AppState;
