//! Application state

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::render::render_document;

/// Client bundle looked up in the assets directory
pub const CLIENT_BUNDLE: &str = "folio-site.js";

/// Shared application state
///
/// The page content is fixed at build time, so the document is rendered
/// once at startup and every request shares it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub page: Arc<str>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let bundle = Path::new(&config.assets_dir).join(CLIENT_BUNDLE);
        let script = if bundle.is_file() {
            info!(bundle = %bundle.display(), "client bundle found, page will hydrate");
            Some(format!("/assets/{CLIENT_BUNDLE}"))
        } else {
            debug!(bundle = %bundle.display(), "no client bundle, serving static page");
            None
        };

        let page = render_document(&config.title, script.as_deref());
        info!(bytes = page.len(), "page rendered");

        Self {
            config: Arc::new(config),
            page: page.into(),
        }
    }
}
