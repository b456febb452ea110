use crate::server::{
    data::map::MapRepository,
    model::map::{CreateMapParam, UpdateMapParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
