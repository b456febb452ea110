use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ride")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub motorbike_id: i32,
    pub start_time: DateTimeUtc,
    pub end_time: Option<DateTimeUtc>,
    /// Elapsed whole seconds, populated when the ride is finished.
    pub duration: String,
    pub cost: f64,
    pub photo_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::motorbike::Entity",
        from = "Column::MotorbikeId",
        to = "super::motorbike::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Motorbike,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::motorbike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motorbike.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
