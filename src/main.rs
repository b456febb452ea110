mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, logging, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    logging::init(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let photos = startup::prepare_photo_storage(&config).await?;
    let jwt = startup::setup_jwt(&config);

    let app = router::router(&config).with_state(AppState::new(db, jwt, photos));

    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
