//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the record REST endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Static WASM/CSS assets are
//! served from the Leptos site root under `/pkg`.

pub mod record_api;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use records::{Doctor, Patient};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::store::RecordTable;
use crate::state::AppState;

/// `GET/POST /api/{collection}` and `GET/PUT/DELETE /api/{collection}/{id}` for `R`.
fn record_routes<R: RecordTable>() -> Router<AppState> {
    let base = format!("/api/{}", R::KIND.collection());
    Router::new()
        .route(&base, get(record_api::list::<R>).post(record_api::create::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(record_api::get::<R>)
                .put(record_api::update::<R>)
                .delete(record_api::delete::<R>),
        )
}

/// REST API routes shared by the SSR app and tests.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(record_routes::<Patient>())
        .merge(record_routes::<Doctor>())
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Leptos SSR frontend: API routes + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new()))
}

/// Full application router. Falls back to the bare API when the Leptos site
/// configuration is unavailable (e.g. running the binary outside cargo-leptos).
pub fn app(state: AppState) -> Router {
    match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos frontend disabled; serving API only");
            api_routes(state)
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
