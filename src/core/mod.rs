//! Core business logic - framework-agnostic CRUD and aggregation operations.
//!
//! Every function here takes a `&DatabaseConnection`, validates its inputs,
//! and returns a `Result`. Nothing in this layer knows about HTTP; the route
//! handlers in [`crate::api`] are thin wrappers over these functions.

/// Approval request operations
pub mod approval;
/// Booking operations
pub mod booking;
/// Dashboard aggregation
pub mod dashboard;
/// Expense operations
pub mod expense;
/// Traveler location operations
pub mod location;
/// User account operations
pub mod user;
