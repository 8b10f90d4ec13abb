//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application state
//! and database model type aliases used by repositories, services and controllers.

pub mod app;
pub mod db;
