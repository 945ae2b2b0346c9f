//! Server routes next to the Leptos pages
//!
//! - `GET  /api/og`        social card PNG
//! - `GET  /icon.svg`      favicon
//! - `GET  /sitemap.xml`   sitemap of the landing anchors
//! - `GET  /robots.txt`    crawler rules
//! - `POST /api/waitlist`  relay of waitlist signups to the capture endpoint

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::core::og::{OgCard, OgError, OgQuery, OgRenderer};
use crate::core::seo::{ICON_SVG, robots_txt, sitemap_xml};
use crate::core::waitlist::{FieldErrors, WaitlistEntry, now_timestamp};

/// Shared, read-only server state
pub struct SiteState {
    pub config: Config,
    pub og: OgRenderer,
    pub http: reqwest::Client,
}

impl SiteState {
    /// Build state from config, loading fonts for the card renderer
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let og = OgRenderer::load(config.og_font_dir.as_deref());
        Self::with_renderer(config, og)
    }

    pub fn with_renderer(config: Config, og: OgRenderer) -> Result<Self, reqwest::Error> {
        // Every relay call is bounded so a silent upstream surfaces as 502
        let http = reqwest::Client::builder()
            .timeout(config.relay_timeout)
            .build()?;
        Ok(Self { config, og, http })
    }
}

/// Error body shared by the JSON routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            fields: None,
        }
    }
}

/// Body of an accepted signup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayAccepted {
    pub accepted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid signup")]
    Invalid(FieldErrors),
    #[error("Could not reach the waitlist service")]
    Upstream(#[source] reqwest::Error),
}

/// Convert RelayError to API response
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            RelayError::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_FAILED"),
            RelayError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNREACHABLE"),
        };

        let mut body = ApiError::new(self.to_string(), code);
        if let RelayError::Invalid(fields) = self {
            body.fields = Some(fields);
        }

        (status, Json(body)).into_response()
    }
}

/// Rendering failures become a plain 500; details stay in the log
impl IntoResponse for OgError {
    fn into_response(self) -> Response {
        tracing::error!("OG image rendering failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate the image",
        )
            .into_response()
    }
}

/// Create the site router
pub fn site_router(state: Arc<SiteState>) -> Router {
    Router::new()
        .route("/api/og", get(og_image))
        .route("/icon.svg", get(icon))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route("/api/waitlist", post(waitlist_relay))
        .with_state(state)
}

async fn og_image(State(state): State<Arc<SiteState>>, Query(query): Query<OgQuery>) -> Response {
    let card = OgCard::from(query);
    tracing::info!("OG image request: title={:?}", card.title);

    let renderer = state.og.clone();
    match tokio::task::spawn_blocking(move || renderer.render(&card)).await {
        Ok(Ok(png)) => (
            [
                (header::CONTENT_TYPE, "image/png"),
                (header::CACHE_CONTROL, "public, max-age=86400"),
            ],
            png,
        )
            .into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            tracing::error!("OG render task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate the image",
            )
                .into_response()
        }
    }
}

async fn icon() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=604800"),
        ],
        ICON_SVG,
    )
}

async fn sitemap(State(state): State<Arc<SiteState>>) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    (
        [(header::CONTENT_TYPE, "application/xml")],
        sitemap_xml(state.config.base_url(), today),
    )
}

async fn robots(State(state): State<Arc<SiteState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(state.config.base_url()),
    )
}

/// Forward a signup to the capture endpoint as query parameters.
/// The upstream body is ignored; only a failed request is an error.
async fn waitlist_relay(
    State(state): State<Arc<SiteState>>,
    Json(entry): Json<WaitlistEntry>,
) -> Result<(StatusCode, Json<RelayAccepted>), RelayError> {
    let errors = FieldErrors::check(&entry.name, &entry.email);
    if !errors.is_empty() {
        tracing::info!("Rejected waitlist signup: {:?}", errors);
        return Err(RelayError::Invalid(errors));
    }

    let timestamp = if entry.timestamp.trim().is_empty() {
        now_timestamp()
    } else {
        entry.timestamp
    };

    let response = state
        .http
        .get(&state.config.waitlist_endpoint)
        .query(&[
            ("name", entry.name.trim()),
            ("email", entry.email.as_str()),
            ("timestamp", timestamp.as_str()),
        ])
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                tracing::warn!(
                    "Waitlist endpoint did not answer within {:?}",
                    state.config.relay_timeout
                );
            } else {
                tracing::warn!("Waitlist endpoint unreachable: {}", e);
            }
            RelayError::Upstream(e)
        })?;

    tracing::info!(
        "Waitlist signup forwarded, upstream status {}",
        response.status()
    );

    Ok((StatusCode::ACCEPTED, Json(RelayAccepted { accepted: true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use resvg::usvg::fontdb;
    use std::collections::HashMap;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tower::ServiceExt;

    fn create_test_app(config: Config) -> Router {
        let og = OgRenderer::with_fonts(fontdb::Database::new());
        site_router(Arc::new(SiteState::with_renderer(config, og).unwrap()))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_signup(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/waitlist")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_icon_route() {
        let response = create_test_app(Config::default())
            .oneshot(get_request("/icon.svg"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
        assert!(body_string(response).await.contains("<svg"));
    }

    #[tokio::test]
    async fn test_sitemap_uses_configured_site_url() {
        let config = Config {
            site_url: "http://localhost:3000/".to_string(),
            ..Config::default()
        };
        let response = create_test_app(config)
            .oneshot(get_request("/sitemap.xml"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body.matches("<url>").count(), 5);
        assert!(body.contains("<loc>http://localhost:3000/#security</loc>"));
    }

    #[tokio::test]
    async fn test_robots_route() {
        let response = create_test_app(Config::default())
            .oneshot(get_request("/robots.txt"))
            .await
            .unwrap();

        let body = body_string(response).await;
        assert!(body.contains("Sitemap: https://flowshot.app/sitemap.xml"));
    }

    #[tokio::test]
    async fn test_og_route_returns_png() {
        let response = create_test_app(Config::default())
            .oneshot(get_request("/api/og?title=Pricing&subtitle=Plans%20for%20studios"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[tokio::test]
    async fn test_invalid_signup_is_rejected_with_field_codes() {
        let response = create_test_app(Config::default())
            .oneshot(post_signup(serde_json::json!({
                "name": "A",
                "email": "not-an-email",
                "timestamp": "2025-01-01T00:00:00.000Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["fields"]["name"], "tooShort");
        assert_eq!(body["fields"]["email"], "invalidFormat");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_bad_gateway() {
        let config = Config {
            waitlist_endpoint: "http://127.0.0.1:9/exec".to_string(),
            ..Config::default()
        };
        let response = create_test_app(config)
            .oneshot(post_signup(serde_json::json!({
                "name": "Ana",
                "email": "ana@studio.io",
                "timestamp": "2025-01-01T00:00:00.000Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: ApiError = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.code, "UPSTREAM_UNREACHABLE");
        assert!(body.fields.is_none());
    }

    #[tokio::test]
    async fn test_silent_endpoint_times_out_as_bad_gateway() {
        // Accepts connections and never writes a byte back
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let config = Config {
            waitlist_endpoint: format!("http://{}/exec", addr),
            relay_timeout: Duration::from_millis(200),
            ..Config::default()
        };
        let response = tokio::time::timeout(
            Duration::from_secs(5),
            create_test_app(config).oneshot(post_signup(serde_json::json!({
                "name": "Ana",
                "email": "ana@studio.io",
                "timestamp": "2025-01-01T00:00:00.000Z"
            }))),
        )
        .await
        .expect("relay should give up on a silent endpoint")
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: ApiError = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.code, "UPSTREAM_UNREACHABLE");
    }

    #[tokio::test]
    async fn test_signup_is_forwarded_as_query_parameters() {
        // Stand-in capture endpoint that answers with an error status;
        // the relay must still accept since the request itself went out.
        let (tx, mut rx) = mpsc::unbounded_channel::<HashMap<String, String>>();
        let upstream = Router::new().route(
            "/exec",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let tx = tx.clone();
                async move {
                    let _ = tx.send(params);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let config = Config {
            waitlist_endpoint: format!("http://{}/exec", addr),
            ..Config::default()
        };
        let response = create_test_app(config)
            .oneshot(post_signup(serde_json::json!({
                "name": "  Ana Lima ",
                "email": "ana@studio.io",
                "timestamp": "2025-01-01T00:00:00.000Z"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let params = rx.recv().await.unwrap();
        assert_eq!(params["name"], "Ana Lima");
        assert_eq!(params["email"], "ana@studio.io");
        assert_eq!(params["timestamp"], "2025-01-01T00:00:00.000Z");
    }

    #[tokio::test]
    async fn test_relay_error_shapes() {
        let response = RelayError::Invalid(FieldErrors::check("", "")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ApiError = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.error, "Invalid signup");
        assert_eq!(
            body.fields,
            Some(FieldErrors {
                name: Some(crate::core::waitlist::ValidationError::Required),
                email: Some(crate::core::waitlist::ValidationError::Required),
            })
        );
    }
}
