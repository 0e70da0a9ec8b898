//! Core domain models for the room administration client.

use serde::{Deserialize, Serialize};

use super::value_object::{Price, RoomId, RoomType, Timestamp};

/// A bookable hotel room as owned by the backend.
///
/// The client never mutates a room; it only lists and deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Room type shown in the listing and matched by the filter
    pub room_type: RoomType,
    /// Nightly price
    pub price: Price,
    /// Whether the backend reports the room as booked
    pub booked: bool,
    /// Base64 encoded photo, carried as-is
    pub photo: Option<String>,
}

impl Room {
    /// Create a new room without booking state or photo
    pub fn new(id: RoomId, room_type: RoomType, price: Price) -> Self {
        Self {
            id,
            room_type,
            price,
            booked: false,
            photo: None,
        }
    }

    /// Attach the booking flag
    pub fn with_booked(mut self, booked: bool) -> Self {
        self.booked = booked;
        self
    }

    /// Attach the encoded photo
    pub fn with_photo(mut self, photo: Option<String>) -> Self {
        self.photo = photo;
        self
    }

    /// Whether the room carries a non-empty photo
    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// The full list of rooms as returned by the last successful load.
///
/// Replaced wholesale on every load; there are no partial updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomCollection {
    rooms: Vec<Room>,
    loaded_at: Option<Timestamp>,
}

impl RoomCollection {
    /// Create a collection from a freshly loaded list of rooms
    pub fn loaded(rooms: Vec<Room>, loaded_at: Timestamp) -> Self {
        Self {
            rooms,
            loaded_at: Some(loaded_at),
        }
    }

    /// Rooms in backend order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// When the collection was loaded, `None` before the first load
    pub fn loaded_at(&self) -> Option<Timestamp> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Find a room by ID
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }
}
