//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including the shared
//! application state handed to Axum handlers and the typed session wrappers used to
//! track the signed-in user.

pub mod app;
pub mod session;
