//! Domain entities - core business objects

mod event;
mod reactable;
mod user;

pub use event::{Emotion, EventKind, ReactableEvent, UnknownVariant};
pub use reactable::Reactable;
pub use user::{Author, User};
