#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use printshop_core::error::CoreError;
use printshop_core::estimation::{
    EstimateSource, EstimationParams, FilamentPriceRecord, FilamentRecord, ModelRecord,
};
use printshop_core::pricing::SurchargeRates;
use printshop_core::types::DbId;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use printshop_api::config::ServerConfig;
use printshop_api::error;
use printshop_api::routes;
use printshop_api::state::AppState;
use printshop_db::PgEstimateSource;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        estimation: EstimationParams::default(),
    }
}

/// Build the full application router backed by PostgreSQL.
pub fn build_test_app(pool: PgPool) -> Router {
    let source = Arc::new(PgEstimateSource::new(pool.clone()));
    build_test_app_with_source(pool, source)
}

/// Build the full application router with a custom estimate source.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack production uses.
pub fn build_test_app_with_source(pool: PgPool, source: Arc<dyn EstimateSource>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        estimate_source: source,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// A pool that never connects; for routes that do not touch the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://printshop@127.0.0.1:1/unused")
        .unwrap()
}

// ---------------------------------------------------------------------------
// In-memory estimate source
// ---------------------------------------------------------------------------

/// Fixed lookup data: model 1 at 1000 mm³, "PLA Test" (id 10) at 0.05 USD/g,
/// "Unpriced" (id 11) with no price, and no settings row.
pub struct StaticSource {
    pub settings: Option<SurchargeRates>,
}

impl StaticSource {
    pub fn seeded() -> Arc<dyn EstimateSource> {
        Arc::new(Self { settings: None })
    }
}

#[async_trait]
impl EstimateSource for StaticSource {
    async fn find_model_by_id(&self, model_id: DbId) -> Result<Option<ModelRecord>, CoreError> {
        Ok((model_id == 1).then(|| ModelRecord {
            model_id,
            volume_mm3: 1000.0,
        }))
    }

    async fn find_filament_by_name(
        &self,
        name: &str,
    ) -> Result<Option<FilamentRecord>, CoreError> {
        let id = match name {
            "PLA Test" => 10,
            "Unpriced" => 11,
            _ => return Ok(None),
        };
        Ok(Some(FilamentRecord {
            id,
            name: name.to_string(),
        }))
    }

    async fn find_latest_price_for_filament(
        &self,
        filament_id: DbId,
    ) -> Result<Option<FilamentPriceRecord>, CoreError> {
        Ok((filament_id == 10).then(|| FilamentPriceRecord {
            id: 100,
            filament_id,
            price_per_gram: 0.05,
            created_at: Utc::now(),
        }))
    }

    async fn find_estimate_settings(&self) -> Result<Option<SurchargeRates>, CoreError> {
        Ok(self.settings)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
