//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered site, its `/pkg` assets and a
//! health check. Paths outside the route table fall through to the Leptos
//! file-and-error handler, which serves static files from the site root or
//! renders the app's not-found page with a 404.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Operational endpoints, independent of the rendered site.
fn ops_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/healthz", get(healthz))
}

/// Wrap `router` in request tracing and, when enabled, gzip.
fn with_layers(router: Router, config: &ServerConfig) -> Router {
    let router = if config.compression { router.layer(CompressionLayer::new()) } else { router };
    router.layer(TraceLayer::new_for_http())
}

/// The full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site::app::App);
    tracing::debug!(count = routes.len(), "registered site routes");

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = ops_routes()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(site::app::shell))
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_layers(router, config))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
