//! Satlogix - the data layer of a travel-and-expense management application.
//!
//! This crate defines the relational schema (users, bookings, expenses,
//! approval requests, traveler locations) as SeaORM entities, wires it to a
//! SQL database selected by `DATABASE_URL` (SQLite, PostgreSQL or MySQL),
//! seeds demo data from a TOML file, and exposes CRUD plus one dashboard
//! aggregation through axum REST handlers.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    future_incompatible,
    rust_2018_idioms
)]
// Allow some pedantic lints that are too noisy for this codebase
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::too_many_arguments,
    clippy::too_many_lines
)]

/// REST route handlers and the response envelope
pub mod api;
/// Configuration management for database, server and seed settings
pub mod config;
/// Core business logic - framework-agnostic CRUD and aggregation operations
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Demo data seeding
pub mod seed;

#[cfg(test)]
pub mod test_utils;
