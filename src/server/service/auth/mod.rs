//! Authentication service layer.
//!
//! This module contains business logic for passwordless email sign-in.
//! Services issue single-use sign-in links and exchange them for a signed-in
//! user when the link is followed.

pub mod callback;
pub mod login;
