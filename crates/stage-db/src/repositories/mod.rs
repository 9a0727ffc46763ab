//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in stage-core.

mod error;
mod event;
mod reactable;
mod user;

pub use event::PgEventRepository;
pub use reactable::PgReactableRepository;
pub use user::PgUserRepository;
