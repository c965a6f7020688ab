pub use super::aquarium::Entity as Aquarium;
pub use super::equipment::Entity as Equipment;
pub use super::livestock::Entity as Livestock;
pub use super::maintenance_log::Entity as MaintenanceLog;
pub use super::sign_in_token::Entity as SignInToken;
pub use super::tank::Entity as Tank;
pub use super::tankwiki_user::Entity as TankwikiUser;
pub use super::test_result::Entity as TestResult;
