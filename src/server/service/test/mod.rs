use crate::server::{
    error::{rental::RentalError, AppError},
    model::ride::TransitionError,
    service::photo::PhotoStorage,
};
use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod connection;
mod motorbike;

async fn motorbike_status(db: &DatabaseConnection, id: i32) -> MotorbikeStatus {
    entity::prelude::Motorbike::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .status
}

async fn ride_count(db: &DatabaseConnection) -> usize {
    entity::prelude::Ride::find().all(db).await.unwrap().len()
}

async fn connection_count(db: &DatabaseConnection) -> usize {
    entity::prelude::BluetoothConnection::find()
        .all(db)
        .await
        .unwrap()
        .len()
}
