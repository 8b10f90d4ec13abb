//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers used across services and controllers: password
//! hashing, API token generation, query string handling with pagination links, shopping list
//! aggregation and layout, and PDF emission of the shopping list.

pub mod password;
pub mod pdf;
pub mod query;
pub mod shopping_list;
pub mod token;
