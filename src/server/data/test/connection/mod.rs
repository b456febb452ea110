use crate::server::data::connection::ConnectionRepository;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod close;
mod find_open_by_motorbike;
mod load_details;
