use super::*;
use crate::server::service::connection::ConnectionService;

/// Tests pairing a rider with an available motorbike.
///
/// Expected: Ok with an open connection and the motorbike status untouched
#[tokio::test]
async fn connect_opens_connection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::create_motorbike(db).await?;

    let detail = ConnectionService::new(db)
        .connect(user.id, motorbike.id)
        .await?;

    assert!(detail.connection.is_open());
    assert_eq!(detail.user.id, user.id);
    assert_eq!(detail.motorbike.id, motorbike.id);
    assert_eq!(
        motorbike_status(db, motorbike.id).await,
        MotorbikeStatus::Available
    );

    Ok(())
}

/// Tests pairing with a motorbike under maintenance.
///
/// Expected: Err(ConnectionUnavailable) and no connection row written
#[tokio::test]
async fn connect_rejects_unavailable_motorbike() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Maintenance)
        .build()
        .await?;

    let result = ConnectionService::new(db)
        .connect(user.id, motorbike.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RentalErr(RentalError::ConnectionUnavailable { .. }))
    ));
    assert_eq!(connection_count(db).await, 0);

    Ok(())
}

/// Tests pairing with a motorbike that already has an open connection.
///
/// Expected: Err(ConnectionAlreadyOpen)
#[tokio::test]
async fn connect_rejects_second_connection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, motorbike, _) = factory::helpers::create_connection_with_dependencies(db).await?;
    let other = factory::create_user(db).await?;

    let result = ConnectionService::new(db)
        .connect(other.id, motorbike.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RentalErr(RentalError::ConnectionAlreadyOpen(_)))
    ));
    assert_eq!(connection_count(db).await, 1);

    Ok(())
}

/// Tests disconnecting a rented motorbike.
///
/// Expected: Ok with the connection closed and the motorbike available again
#[tokio::test]
async fn disconnect_releases_motorbike() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Rented)
        .build()
        .await?;
    factory::create_connection(db, user.id, motorbike.id).await?;

    let closed = ConnectionService::new(db).disconnect(motorbike.id).await?;

    assert!(!closed.is_open());
    assert_eq!(
        motorbike_status(db, motorbike.id).await,
        MotorbikeStatus::Available
    );

    Ok(())
}

/// Tests disconnecting a motorbike with no open connection.
///
/// Expected: Err(NoOpenConnection) and the motorbike status unchanged
#[tokio::test]
async fn disconnect_without_connection_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Rented)
        .build()
        .await?;

    let result = ConnectionService::new(db).disconnect(motorbike.id).await;

    assert!(matches!(
        result,
        Err(AppError::RentalErr(RentalError::NoOpenConnection(_)))
    ));
    assert_eq!(motorbike_status(db, motorbike.id).await, MotorbikeStatus::Rented);

    Ok(())
}

/// Tests disconnecting a motorbike whose only connection is already closed.
///
/// Expected: Err(NoOpenConnection), the closed connection untouched and the motorbike
/// status unchanged
#[tokio::test]
async fn disconnect_already_closed_connection_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let motorbike = factory::motorbike::MotorbikeFactory::new(db)
        .status(MotorbikeStatus::Rented)
        .build()
        .await?;
    let closed_at = chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2025, 3, 1, 10, 0, 0).unwrap();
    let connection = factory::connection::ConnectionFactory::new(db, user.id, motorbike.id)
        .disconnected_at(closed_at)
        .build()
        .await?;

    let result = ConnectionService::new(db).disconnect(motorbike.id).await;

    assert!(matches!(
        result,
        Err(AppError::RentalErr(RentalError::NoOpenConnection(_)))
    ));
    assert_eq!(motorbike_status(db, motorbike.id).await, MotorbikeStatus::Rented);

    let stored = entity::prelude::BluetoothConnection::find_by_id(connection.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.disconnected_at, Some(closed_at));

    Ok(())
}
