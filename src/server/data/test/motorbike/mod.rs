use crate::server::{
    data::motorbike::MotorbikeRepository,
    model::motorbike::{CreateMotorbikeParam, UpdateMotorbikeParam},
};
use entity::sea_orm_active_enums::{LockStatus, MotorbikeStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_status;
mod soft_delete;
mod transition_status;
mod update;
