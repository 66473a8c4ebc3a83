//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod approval_request;
pub mod booking;
pub mod expense;
pub mod traveler_location;
pub mod user;

// Re-export specific types to avoid conflicts
pub use approval_request::{
    ApprovalStatus, ApprovalTarget, Column as ApprovalRequestColumn, Entity as ApprovalRequest,
    Model as ApprovalRequestModel,
};
pub use booking::{
    BookingStatus, BookingType, Column as BookingColumn, Entity as Booking, Model as BookingModel,
};
pub use expense::{
    Column as ExpenseColumn, Entity as Expense, ExpenseStatus, Model as ExpenseModel,
};
pub use traveler_location::{
    Column as TravelerLocationColumn, Entity as TravelerLocation, Model as TravelerLocationModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel, Role};
