//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no business API: the auth backend lives elsewhere and the
//! browser talks to it directly. This router only server-renders the Leptos
//! app, serves the compiled WASM/CSS bundle, and answers health checks.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;

/// Full application router.
///
/// # Errors
///
/// Returns `HostError::Leptos` if the site configuration cannot be loaded
/// (missing or malformed `[package.metadata.leptos]` / `LEPTOS_*` env).
pub fn app() -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    Ok(leptos_app(conf.leptos_options))
}

fn leptos_app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "generated leptos routes");

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = leptos_options.site_pkg_dir.to_string();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    base_routes()
        .merge(leptos_router)
        .nest_service(&format!("/{pkg_dir}"), ServeDir::new(site_root.join(&pkg_dir)))
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not depend on the Leptos site configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
