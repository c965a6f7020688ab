pub mod prelude;

pub mod aquarium;
pub mod equipment;
pub mod livestock;
pub mod maintenance_log;
pub mod sign_in_token;
pub mod tank;
pub mod tankwiki_user;
pub mod test_result;
