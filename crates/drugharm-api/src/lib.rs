//! drugharm-api
//!
//! Read-only HTTP surface over the study registry: schemas, per-study
//! breakdowns under a criteria selection, aggregate rankings, and the
//! cross-study comparison.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;

use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use config::{ApiConfig, CorsOrigin};

/// All routes with request logging, without CORS.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Studies
        .route("/studies", get(routes::studies::list_studies))
        .route("/studies/{study}", get(routes::studies::get_study_detail))
        .route(
            "/studies/{study}/scores",
            get(routes::studies::get_study_scores),
        )
        .route(
            "/studies/{study}/ranking",
            get(routes::studies::get_study_ranking),
        )
        // Cross-study comparison
        .route("/comparison", get(routes::comparison::get_comparison))
        .route(
            "/comparison/drugs",
            get(routes::comparison::list_comparable_drugs),
        )
        .route(
            "/comparison/aggregate",
            get(routes::comparison::get_aggregate_comparison),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
}

/// CORS policy for `config`. Fails when the configured origin is not a valid header value.
pub fn cors_layer(config: &ApiConfig) -> eyre::Result<CorsLayer> {
    let origin = match &config.cors_origin {
        CorsOrigin::Any => AllowOrigin::from(Any),
        CorsOrigin::Exact(origin) => {
            let value = HeaderValue::from_str(origin)
                .map_err(|e| eyre::eyre!("invalid DRUGHARM_CORS_ORIGIN '{origin}': {e}"))?;
            AllowOrigin::exact(value)
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// The full application served by the binary.
pub fn app(config: &ApiConfig) -> eyre::Result<Router> {
    Ok(router().layer(cors_layer(config)?))
}
