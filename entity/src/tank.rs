use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tank")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aquarium_id: i32,
    pub name: String,
    pub volume: f64,
    pub tank_type: String,
    pub custom_type: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aquarium::Entity",
        from = "Column::AquariumId",
        to = "super::aquarium::Column::Id"
    )]
    Aquarium,
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
    #[sea_orm(has_many = "super::livestock::Entity")]
    Livestock,
    #[sea_orm(has_many = "super::maintenance_log::Entity")]
    MaintenanceLog,
    #[sea_orm(has_many = "super::test_result::Entity")]
    TestResult,
}

impl Related<super::aquarium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aquarium.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<super::livestock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Livestock.def()
    }
}

impl Related<super::maintenance_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceLog.def()
    }
}

impl Related<super::test_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
