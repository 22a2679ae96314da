use axum::{Router, middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;

use crate::handlers::api::{simulate_function, simulate_function_with_id};
use crate::middleware::{handle_panic, log_requests, request_id_layer};
use crate::state::AppState;

/// Build the full service: API routes, static fallback for everything
/// else, wrapped in the cross-cutting middleware.
pub fn build_router(state: AppState) -> Router {
    let static_site = ServeDir::new(&state.web_dir);

    let router = Router::new()
        // API routes. An unsupported method falls through to the static
        // site, exactly like a non-API path.
        .route(
            "/api/{function}",
            get(simulate_function)
                .post(simulate_function)
                .put(simulate_function)
                .fallback_service(static_site.clone()),
        )
        .route(
            "/api/{function}/{id}",
            get(simulate_function_with_id)
                .post(simulate_function_with_id)
                .put(simulate_function_with_id)
                .delete(simulate_function_with_id)
                .fallback_service(static_site.clone()),
        )
        // Everything else
        .fallback_service(static_site)
        .with_state(state);

    apply_middleware(router)
}

/// The ordered decorator list around every route. Layers wrap bottom-up,
/// so the request id is stamped before logging runs, and the recovery
/// boundary sits closest to the handlers.
pub fn apply_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_requests))
        .layer(request_id_layer())
}
