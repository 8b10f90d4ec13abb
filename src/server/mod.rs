//! Server application core modules.
//!
//! This module contains the Foodgram backend: HTTP routing, token authentication, database
//! access, recipe and relation services, and shopping list export.

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
pub mod util;
