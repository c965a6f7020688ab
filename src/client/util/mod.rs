pub mod create_aquarium;
pub mod create_tank;
pub mod get_aquariums;
pub mod get_livestock_summary;
pub mod get_tank_records;
pub mod get_tanks;
pub mod get_user;
pub mod response_error;
pub mod sign_in;
pub mod theme;
