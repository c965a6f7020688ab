use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tank_id: i32,
    pub name: String,
    pub equipment_type: String,
    pub status: String,
    pub install_date: Date,
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
