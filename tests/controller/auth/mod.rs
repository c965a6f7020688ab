//! Tests for authentication controller endpoints.
//!
//! This module contains integration tests for authentication-related HTTP
//! endpoints, covering the email sign-in link flow, the callback that
//! consumes a sign-in token, logout, and signed-in user retrieval.

mod callback;
mod login;
mod logout;
mod user;
