use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{admin::register_commands, health::index, interaction::interactions},
    middleware::signature::verify_signature,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    let signed = Router::new()
        .route("/interactions", post(interactions))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            verify_signature,
        ));

    Router::new()
        .route("/", get(index))
        .route("/register_commands", get(register_commands))
        .merge(signed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
