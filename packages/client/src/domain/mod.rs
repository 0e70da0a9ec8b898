//! Domain layer for the room administration client.
//!
//! This module contains the room model, filtering and pagination logic,
//! independent of HTTP and presentation concerns.

pub mod entity;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod repository;
pub mod value_object;

pub use entity::{Room, RoomCollection};
pub use error::{PaginationError, RepositoryError, ValueObjectError};
pub use filter::{RoomFilter, available_room_types, compute_filtered_collection};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, Paginator, page_bounds, total_pages};
pub use repository::RoomRepository;
pub use value_object::{Price, RoomId, RoomType, Timestamp};

#[cfg(test)]
pub use repository::MockRoomRepository;
