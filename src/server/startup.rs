use crate::server::{
    config::Config,
    error::AppError,
    service::{auth::jwt::JwtManager, photo::PhotoStorage},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}

/// Creates the upload directory tree if it does not exist yet.
pub async fn prepare_photo_storage(config: &Config) -> Result<PhotoStorage, AppError> {
    let storage = PhotoStorage::new(&config.upload_dir);
    tokio::fs::create_dir_all(storage.resolve("rides")).await?;

    Ok(storage)
}

pub fn setup_jwt(config: &Config) -> JwtManager {
    JwtManager::new(
        config.jwt_secret.as_bytes(),
        config.access_token_ttl(),
        config.refresh_token_ttl(),
    )
}

/// Resolves once Ctrl-C or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
