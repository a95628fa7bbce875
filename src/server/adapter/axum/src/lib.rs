/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use saminvest_server::{SiteError, SiteServer};

/// Re-export saminvest-server core for convenience
pub use saminvest_server;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> Result<axum::Router, SiteError>;
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> Result<axum::Router, SiteError> {
    Ok(handler::build_router(self.into_parts()?))
  }
}
