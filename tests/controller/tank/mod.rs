//! Tests for tank controller endpoints.

mod create_tank;
mod get_tank;
mod get_tanks;
mod records;
