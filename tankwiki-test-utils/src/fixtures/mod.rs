//! Test fixture modules for seeding the database during tests.
//!
//! Each submodule hangs an accessor off `TestSetup` for one slice of the
//! schema:
//!
//! - `user` - account rows
//! - `sign_in_token` - email sign-in tokens
//! - `aquarium` - aquariums owned by a user
//! - `tank` - tanks within an aquarium
//! - `records` - per-tank equipment, livestock, maintenance, and test results

pub mod aquarium;
pub mod records;
pub mod sign_in_token;
pub mod tank;
pub mod user;
