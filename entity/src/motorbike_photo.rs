use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "motorbike_photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub motorbike_id: i32,
    pub photo_url: String,
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
}

impl Related<super::motorbike::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motorbike.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
