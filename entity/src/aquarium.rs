use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "aquarium")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub preferred_units: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tankwiki_user::Entity",
        from = "Column::UserId",
        to = "super::tankwiki_user::Column::Id"
    )]
    TankwikiUser,
    #[sea_orm(has_many = "super::tank::Entity")]
    Tank,
}

impl Related<super::tankwiki_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TankwikiUser.def()
    }
}

impl Related<super::tank::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
