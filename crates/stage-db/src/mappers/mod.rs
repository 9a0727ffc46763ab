//! Entity to model mappers
//!
//! Conversions between domain entities (stage-core) and database models:
//! - `From<Model> for Entity`: convert rows to domain objects
//! - `TryFrom<EventModel>`: event rows carry TEXT enums whose decoding can fail

mod event;
mod reactable;
mod user;
