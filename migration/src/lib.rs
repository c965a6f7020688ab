pub use sea_orm_migration::prelude::*;

mod m20260824_000001_tankwiki_user;
mod m20260824_000002_sign_in_token;
mod m20260824_000003_aquarium;
mod m20260824_000004_tank;
mod m20260824_000005_equipment;
mod m20260824_000006_livestock;
mod m20260824_000007_maintenance_log;
mod m20260824_000008_test_result;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260824_000001_tankwiki_user::Migration),
            Box::new(m20260824_000002_sign_in_token::Migration),
            Box::new(m20260824_000003_aquarium::Migration),
            Box::new(m20260824_000004_tank::Migration),
            Box::new(m20260824_000005_equipment::Migration),
            Box::new(m20260824_000006_livestock::Migration),
            Box::new(m20260824_000007_maintenance_log::Migration),
            Box::new(m20260824_000008_test_result::Migration),
        ]
    }
}
