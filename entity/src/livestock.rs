use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "livestock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tank_id: i32,
    pub species: String,
    pub common_name: Option<String>,
    pub quantity: i32,
    pub health_status: String,
    pub date_added: Date,
    pub notes: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tank::Entity",
        from = "Column::TankId",
        to = "super::tank::Column::Id"
    )]
    Tank,
}

impl Related<super::tank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
