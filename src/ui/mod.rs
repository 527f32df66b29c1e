//! Presentation layer.
//!
//! `components` holds the Dioxus building blocks used by both views. With the
//! `server` feature this module also serves the prerendered landing page over
//! axum, for crawlers and visitors without the web bundle.

pub mod components;

#[cfg(feature = "server")]
pub use server::{html_doc, router, AppState};

#[cfg(feature = "server")]
mod server {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        extract::State,
        http::{StatusCode, Uri},
        response::{Html, IntoResponse},
        routing::get,
        Router,
    };
    use tower_http::{services::ServeDir, trace::TraceLayer};

    use crate::app;
    use crate::content::{FAVICON, PAGE_DESCRIPTION, PAGE_TITLE, VIEWPORT};
    use crate::view::View;

    /// Shared, read-only server state.
    #[derive(Clone)]
    pub struct AppState {
        landing: Arc<str>,
    }

    impl AppState {
        /// Prerender the initial view once.
        pub fn prerender() -> Self {
            let body = app::prerender(View::default());
            tracing::info!(bytes = body.len(), "prerendered landing page");
            Self {
                landing: html_doc(PAGE_TITLE, &body).into(),
            }
        }
    }

    /// HTML document wrapper with the fixed head.
    pub fn html_doc(title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="{VIEWPORT}">
    <meta name="description" content="{PAGE_DESCRIPTION}">
    <title>{title}</title>
    <link rel="icon" href="{FAVICON}" type="image/svg+xml">
    <link rel="stylesheet" href="/assets/site.css">
</head>
<body>
    <div id="main">{body}</div>
</body>
</html>"#
        )
    }

    pub fn router(state: AppState, assets_dir: &Path) -> Router {
        Router::new()
            .route("/", get(landing_page))
            .nest_service("/assets", ServeDir::new(assets_dir))
            .fallback(not_found)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// GET / - prerendered landing view
    async fn landing_page(State(state): State<AppState>) -> impl IntoResponse {
        Html(state.landing.to_string())
    }

    async fn not_found(uri: Uri) -> impl IntoResponse {
        tracing::debug!(%uri, "no route");
        let body = r##"<section class="section"><h1>Page not found</h1><p><a href="/">Back to Thermonitor WNY</a></p></section>"##;
        (StatusCode::NOT_FOUND, Html(html_doc("Not found | Thermonitor WNY", body)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::scroll::Section;
        use axum::body::{to_bytes, Body};
        use axum::http::Request;
        use tower::ServiceExt;

        async fn fetch(path: &str) -> (StatusCode, String) {
            let app = router(AppState::prerender(), Path::new("public/assets"));
            let response = app
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, String::from_utf8(bytes.to_vec()).unwrap())
        }

        #[tokio::test]
        async fn serves_landing_document() {
            let (status, html) = fetch("/").await;
            assert_eq!(status, StatusCode::OK);
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(&format!("<title>{PAGE_TITLE}</title>")));
            assert!(html.contains(PAGE_DESCRIPTION));
            assert!(html.contains(r#"name="viewport""#));
            for section in Section::ALL {
                assert!(html.contains(&format!(r#"id="{}""#, section.anchor())));
            }
            assert!(!html.contains("panel-table"));
        }

        #[tokio::test]
        async fn landing_document_has_no_dead_controls() {
            let (_, html) = fetch("/").await;
            for label in ["View demo", "Sign in", "See the demo"] {
                assert!(!html.contains(label), "{label} shipped without a handler");
            }
            assert!(!html.contains("data-trigger"));
            assert!(html.contains("contact-form"));
            assert!(html.matches(r##"href="#contact""##).count() >= 3);
        }

        #[tokio::test]
        async fn unknown_path_is_404() {
            let (status, html) = fetch("/pricing").await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(html.contains("Page not found"));
        }

        #[tokio::test]
        async fn serves_static_assets() {
            let (status, body) = fetch("/assets/site.css").await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains(".site-header"));
        }
    }
}
