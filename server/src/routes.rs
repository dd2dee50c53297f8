//! HTTP routes

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create the site router
pub fn site_routes(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);
    let assets_dir = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest_service("/static", static_dir)
        .nest_service("/assets", assets_dir)
        .fallback(not_found)
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn health() -> &'static str {
    "ok"
}

/// 404 handler
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html("<h1>404</h1><p>Nothing here. <a href=\"/\">Back home</a></p>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            assets_dir: "/nonexistent/assets".to_string(),
            ..Config::default()
        };
        site_routes(AppState::new(config))
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_serves_rendered_page() {
        let (status, body) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains(r#"id="home""#));
        assert!(!body.contains("<script"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_body("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, body) = get_body("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404"));
    }

    #[tokio::test]
    async fn test_content_images_are_shipped() {
        use folio_core::content::{PROFILE, PROJECTS};

        let config = Config {
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
            assets_dir: "/nonexistent/assets".to_string(),
            ..Config::default()
        };
        let app = site_routes(AppState::new(config));

        let local = std::iter::once(PROFILE.portrait)
            .chain(PROJECTS.iter().map(|p| p.image))
            .filter(|path| path.starts_with("/static/"));
        for path in local {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            assert_eq!(response.headers()["content-type"], "image/jpeg");
        }
    }

    #[tokio::test]
    async fn test_missing_asset_is_404() {
        let (status, _) = get_body("/assets/folio-site.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
