use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tankwiki_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aquarium::Entity")]
    Aquarium,
}

impl Related<super::aquarium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aquarium.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
