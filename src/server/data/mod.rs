//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, one per table.
//! Child-record repositories (equipment, livestock, maintenance logs, test results)
//! are read-only; their rows are scoped to a tank that callers have already resolved.

pub mod aquarium;
pub mod equipment;
pub mod livestock;
pub mod maintenance_log;
pub mod sign_in_token;
pub mod tank;
pub mod test_result;
pub mod user;
