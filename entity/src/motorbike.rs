use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{LockStatus, MotorbikeStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "motorbike")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub status: MotorbikeStatus,
    pub lock_status: LockStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bluetooth_connection::Entity")]
    BluetoothConnection,
    #[sea_orm(has_one = "super::map::Entity")]
    Map,
    #[sea_orm(has_many = "super::motorbike_photo::Entity")]
    MotorbikePhoto,
    #[sea_orm(has_many = "super::ride::Entity")]
    Ride,
}

impl Related<super::bluetooth_connection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BluetoothConnection.def()
    }
}

impl Related<super::map::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Map.def()
    }
}

impl Related<super::motorbike_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MotorbikePhoto.def()
    }
}

impl Related<super::ride::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ride.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
