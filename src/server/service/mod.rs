//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between controllers and
//! repositories. Services validate input, enforce aquarium and tank ownership,
//! and map database models to the DTOs shared with the client.

pub mod aquarium;
pub mod auth;
pub mod tank;
pub mod user;
