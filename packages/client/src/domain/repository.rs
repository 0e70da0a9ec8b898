//! Repository trait for room data access.
//!
//! Defined in the domain layer and implemented by the infrastructure layer
//! (dependency inversion); use cases only ever see this trait.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{entity::Room, error::RepositoryError, value_object::RoomId};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Fetch every room, in backend order
    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError>;

    /// Delete a room by ID
    async fn delete_room(&self, id: RoomId) -> Result<(), RepositoryError>;
}
