//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, verifying request handling, response formatting, session
//! handling, and error responses for all API endpoints. Handlers are invoked
//! directly with extractors built from the test setup rather than through a
//! running server.

mod aquarium;
mod auth;
mod livestock;
mod tank;
