use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderName, Request},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, connection, health, map, motorbike, ride, user},
    openapi::ApiDoc,
    state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the application router with every API route, Swagger UI and the HTTP layers.
///
/// # Arguments
/// - `config` - Provides the request body limit
///
/// # Returns
/// - `Router<AppState>` - Router awaiting its state
pub fn router(config: &Config) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<axum::body::Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/version", get(health::version))
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/admin/login", post(auth::admin_login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
        // Users
        .route("/api/user/create", post(user::register))
        .route("/api/user/admin", post(user::create_admin))
        .route("/api/user/me", get(user::get_me).put(user::update_me))
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        // Motorbikes
        .route("/api/motorbikes", get(motorbike::get_motorbikes))
        .route(
            "/api/motorbikes/available",
            get(motorbike::get_available_motorbikes),
        )
        .route(
            "/api/motorbikes/maintenance",
            get(motorbike::get_maintenance_motorbikes),
        )
        .route("/api/motorbikes/rented", get(motorbike::get_rented_motorbikes))
        .route("/api/motorbike", post(motorbike::create_motorbike))
        .route(
            "/api/motorbike/{id}",
            get(motorbike::get_motorbike)
                .put(motorbike::update_motorbike)
                .delete(motorbike::delete_motorbike),
        )
        .route(
            "/api/motorbike/{id}/photos",
            get(motorbike::get_motorbike_photos),
        )
        .route(
            "/api/motorbike/{id}/status",
            put(motorbike::update_motorbike_status),
        )
        .route(
            "/api/motorbike/{id}/lock-status",
            put(motorbike::update_motorbike_lock_status),
        )
        // Bluetooth connections
        .route("/api/connections", get(connection::get_connections))
        .route("/api/connection/connect", post(connection::connect))
        .route(
            "/api/connection/disconnect/{motorbike_id}",
            put(connection::disconnect),
        )
        .route(
            "/api/connection/{id}",
            get(connection::get_connection).delete(connection::delete_connection),
        )
        .route(
            "/api/connection/motorbike/{motorbike_id}",
            get(connection::get_motorbike_connections),
        )
        .route(
            "/api/connection/user/{user_id}",
            get(connection::get_user_connections),
        )
        // Rides
        .route("/api/rides", get(ride::get_rides))
        .route("/api/ride", post(ride::create_ride))
        .route(
            "/api/ride/{id}",
            get(ride::get_ride)
                .put(ride::update_ride)
                .delete(ride::delete_ride),
        )
        .route("/api/ride/finish/{id}", put(ride::finish_ride))
        .route("/api/ride/{id}/photo", post(ride::submit_ride_photo))
        .route("/api/rides/user/{user_id}", get(ride::get_user_rides))
        .route(
            "/api/rides/user/{user_id}/ride/{ride_id}",
            get(ride::get_user_ride),
        )
        .route(
            "/api/rides/user/{user_id}/filter",
            get(ride::get_user_rides_between),
        )
        .route(
            "/api/rides/motorbike/{motorbike_id}",
            get(ride::get_motorbike_rides),
        )
        .route("/api/filtered-rides", get(ride::get_rides_between))
        // Maps
        .route("/api/maps", get(map::get_maps))
        .route("/api/map", post(map::create_map))
        .route(
            "/api/map/{id}",
            get(map::get_map).put(map::update_map).delete(map::delete_map),
        )
        .route(
            "/api/map/motorbike/{motorbike_id}",
            get(map::get_motorbike_map).put(map::update_motorbike_map),
        )
}
