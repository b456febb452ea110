use sea_orm::entity::prelude::*;

/// Availability of a motorbike for new rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum MotorbikeStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    #[sea_orm(string_value = "rented")]
    Rented,
}

/// Physical immobilizer state reported by the motorbike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum LockStatus {
    #[sea_orm(string_value = "locked")]
    Locked,
    #[sea_orm(string_value = "unlocked")]
    Unlocked,
}

/// Account role, stored as its numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum UserRole {
    #[sea_orm(num_value = 1)]
    Normal,
    #[sea_orm(num_value = 10)]
    Admin,
}
