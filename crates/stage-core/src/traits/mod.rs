//! Repository and storage traits (ports)

mod repositories;

pub use repositories::{
    EventRepository, MediaStore, ReactableRepository, RepoResult, UserRepository,
};
