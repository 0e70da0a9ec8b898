//! Room filtering.
//!
//! The filtered collection is always derived from the base collection by
//! [`compute_filtered_collection`]; callers recompute it whenever either the
//! base collection or the criteria change instead of mutating it in place.

use std::fmt;

use super::{entity::Room, value_object::RoomType};

/// Filter criteria applied to the room listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    room_type: Option<String>,
}

impl RoomFilter {
    /// No filter: every room matches
    pub fn none() -> Self {
        Self::default()
    }

    /// Match rooms whose type contains `needle`, ignoring case.
    ///
    /// A blank needle is the same as no filter.
    pub fn by_room_type(needle: &str) -> Self {
        let needle = needle.trim();
        if needle.is_empty() {
            return Self::none();
        }
        Self {
            room_type: Some(needle.to_lowercase()),
        }
    }

    /// Whether the filter lets every room through
    pub fn is_identity(&self) -> bool {
        self.room_type.is_none()
    }

    /// The (lower-cased) room type needle, if any
    pub fn room_type(&self) -> Option<&str> {
        self.room_type.as_deref()
    }

    pub fn matches(&self, room: &Room) -> bool {
        match &self.room_type {
            None => true,
            Some(needle) => room.room_type.as_str().to_lowercase().contains(needle),
        }
    }
}

impl fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.room_type {
            None => write!(f, "all room types"),
            Some(needle) => write!(f, "room type contains \"{needle}\""),
        }
    }
}

/// Derive the filtered collection from the base collection.
///
/// The result keeps the base order and only contains rooms of `base`.
pub fn compute_filtered_collection(base: &[Room], criteria: &RoomFilter) -> Vec<Room> {
    if criteria.is_identity() {
        return base.to_vec();
    }
    base.iter()
        .filter(|room| criteria.matches(room))
        .cloned()
        .collect()
}

/// Distinct room types in first-seen order, offered as filter choices
pub fn available_room_types(base: &[Room]) -> Vec<RoomType> {
    let mut types: Vec<RoomType> = Vec::new();
    for room in base {
        if !types.contains(&room.room_type) {
            types.push(room.room_type.clone());
        }
    }
    types
}
