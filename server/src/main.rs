//! Folio server
//!
//! Renders the portfolio page and serves it with Axum. Built with the
//! `web` feature instead, the same components run in the browser.

#[cfg(feature = "web")]
fn main() {
    dioxus::launch(folio_site::ui::App);
}

#[cfg(all(feature = "server", not(feature = "web")))]
mod server {
    use clap::Parser;
    use folio_site::config::Config;
    use folio_site::routes::site_routes;
    use folio_site::state::AppState;
    use tracing::{info, instrument};

    /// Folio portfolio server
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Server address to bind to (overrides the configuration)
        #[arg(short, long)]
        addr: Option<String>,

        /// Path to configuration file
        #[arg(short, long, env = "FOLIO_CONFIG")]
        config: Option<String>,
    }

    #[instrument]
    pub async fn run() -> anyhow::Result<()> {
        // Initialize tracing
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,folio_site=debug".into()),
            )
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        let args = Args::parse();

        let mut config = Config::load(args.config.as_deref())?;
        if let Some(addr) = args.addr {
            config.addr = addr;
        }
        let addr = config.socket_addr()?;
        info!(%addr, static_dir = %config.static_dir, "Starting folio server");

        let state = AppState::new(config);

        let app = site_routes(state)
            .layer(
                tower_http::trace::TraceLayer::new_for_http().make_span_with(
                    |request: &axum::http::Request<_>| {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    },
                ),
            )
            .layer(tower_http::compression::CompressionLayer::new());

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "Server listening");

        axum::serve(listener, app.into_make_service()).await?;

        Ok(())
    }
}

#[cfg(all(feature = "server", not(feature = "web")))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run().await
}
