//! Server application core modules.
//!
//! This module contains all server-side functionality for the TankWiki application,
//! including HTTP routing, sign-in link authentication, session management, and database
//! operations for aquariums, tanks, and the husbandry records kept against them. It
//! provides the complete backend the Dioxus client fetches from.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
