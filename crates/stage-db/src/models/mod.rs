//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod reactable;
mod user;

pub use event::EventModel;
pub use reactable::ReactableModel;
pub use user::{AuthorModel, UserModel};
