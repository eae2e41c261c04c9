use sea_orm::{ConnectionTrait, EntityTrait};

use crate::entity::{artist, venue};
use crate::error::AppError;

/// Look up a venue by ID, returning 404 if not found.
pub async fn find_venue<C: ConnectionTrait>(db: &C, id: i32) -> Result<venue::Model, AppError> {
    venue::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))
}

/// Look up an artist by ID, returning 404 if not found.
pub async fn find_artist<C: ConnectionTrait>(db: &C, id: i32) -> Result<artist::Model, AppError> {
    artist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {id} not found")))
}
