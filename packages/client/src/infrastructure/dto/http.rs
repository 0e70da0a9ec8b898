//! HTTP API payload DTOs for the room endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Price, Room, RoomId, RoomType, ValueObjectError};

/// Room record as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i64,
    pub room_type: String,
    #[serde(alias = "roomPrice")]
    pub price: Decimal,
    #[serde(default, alias = "booked")]
    pub is_booked: bool,
    #[serde(default, alias = "roomPhoto")]
    pub photo: Option<String>,
}

impl TryFrom<RoomDto> for Room {
    type Error = ValueObjectError;

    fn try_from(dto: RoomDto) -> Result<Self, Self::Error> {
        Ok(Room::new(
            RoomId::new(dto.id)?,
            RoomType::new(dto.room_type)?,
            Price::new(dto.price)?,
        )
        .with_booked(dto.is_booked)
        .with_photo(dto.photo))
    }
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.value(),
            room_type: room.room_type.as_str().to_string(),
            price: room.price.amount(),
            is_booked: room.booked,
            photo: room.photo.clone(),
        }
    }
}

/// Error payload sent by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorPayloadDto {
    #[serde(default)]
    pub message: Option<String>,
}
