//! Reactable entity <-> model mapper

use stage_core::entities::Reactable;
use stage_core::value_objects::Id;

use crate::models::ReactableModel;

/// Rows come back un-enriched: derived fields carry their defaults.
impl From<ReactableModel> for Reactable {
    fn from(model: ReactableModel) -> Self {
        let mut reactable = Reactable::new(Id::new(model.director_id), model.created, model.media_url);
        reactable.id = Id::new(model.id);
        reactable
    }
}
