use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{browse, handlers, movie, session};
use crate::state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Session
        .route("/session", post(session::login))
        .route("/session", get(session::get_session))
        .route("/session", delete(session::logout))
        // Browsing
        .route("/browse", get(browse::get_browse))
        .route("/browse/discover", post(browse::discover))
        .route("/browse/trending", post(browse::trending))
        .route("/browse/search", post(browse::search))
        .route("/browse/search", delete(browse::clear_search))
        .route("/browse/more", post(browse::load_more))
        .route("/browse/favorites", post(browse::show_favorites))
        .route("/browse/filters", put(browse::put_filters))
        // Favorites
        .route("/favorites", get(browse::get_favorites))
        .route("/favorites", post(browse::toggle_favorite))
        // Movie details
        .route("/movies/{id}", get(movie::get_movie))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
