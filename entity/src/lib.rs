//! SeaORM entity definitions for the motorbike rental database.

pub mod prelude;

pub mod bluetooth_connection;
pub mod map;
pub mod motorbike;
pub mod motorbike_photo;
pub mod refresh_token;
pub mod ride;
pub mod sea_orm_active_enums;
pub mod user;
