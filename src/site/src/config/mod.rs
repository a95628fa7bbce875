/* src/site/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{apply_env_overrides, find_site_config, load_site_config};
pub use types::SiteConfig;
