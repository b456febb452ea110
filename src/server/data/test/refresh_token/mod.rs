use crate::server::data::refresh_token::RefreshTokenRepository;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_user;
mod find_valid;
