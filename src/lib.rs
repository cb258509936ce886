//! Car price prediction service.
//!
//! A small actix-web front end over a pre-trained linear regression: the
//! artifact is loaded once at startup, shared read-only across workers, and
//! evaluated per request against six numeric form fields.

pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod routes;
