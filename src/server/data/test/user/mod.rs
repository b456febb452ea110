use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod in_use;
mod update;

fn create_param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        name: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: "hash".to_string(),
        role: UserRole::Normal,
    }
}
