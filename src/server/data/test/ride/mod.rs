use crate::server::{
    data::ride::RideRepository,
    model::ride::{DateRange, RideCharge},
    util::parse::parse_date_range,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod finish;
mod get_finished_between;
