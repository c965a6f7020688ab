pub mod api;
pub mod aquarium;
pub mod auth;
pub mod compose;
pub mod display;
pub mod equipment;
pub mod livestock;
pub mod maintenance;
pub mod tank;
pub mod test_result;
pub mod user;
pub mod validate;
