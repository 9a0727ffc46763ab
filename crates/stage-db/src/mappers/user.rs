//! User entity <-> model mappers

use stage_core::entities::{Author, User};
use stage_core::value_objects::Id;

use crate::models::{AuthorModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            device_id: model.device_id,
            joined: model.joined,
        }
    }
}

impl From<AuthorModel> for Author {
    fn from(model: AuthorModel) -> Self {
        Author {
            id: Id::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
        }
    }
}
