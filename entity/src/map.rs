use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "map")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub motorbike_id: i32,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom_level: i32,
    pub map_type: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
