//! Room entity - the single resource a showtime books

use std::fmt;
use std::str::FromStr;

use crate::{DomainError, RoomId};

/// Projection format supported by a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    TwoD,
    ThreeD,
    Vip,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeD => "3D",
            Self::Vip => "VIP",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "2D" => Ok(Self::TwoD),
            "3D" => Ok(Self::ThreeD),
            "VIP" => Ok(Self::Vip),
            _ => Err(DomainError::parse("Invalid type, must be 2D, 3D or VIP")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub room_type: RoomType,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        capacity: i64,
        room_type: RoomType,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        let capacity = u32::try_from(capacity)
            .ok()
            .filter(|seats| *seats > 0)
            .ok_or_else(|| DomainError::validation("The capacity must be a positive number."))?;

        Ok(Self {
            id: RoomId::new(),
            name,
            capacity,
            room_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_room_types_case_insensitively() {
        assert_eq!("2D".parse::<RoomType>().unwrap(), RoomType::TwoD);
        assert_eq!("3d".parse::<RoomType>().unwrap(), RoomType::ThreeD);
        assert_eq!(" vip ".parse::<RoomType>().unwrap(), RoomType::Vip);
    }

    #[test]
    fn rejects_unknown_room_type() {
        let err = "4D".parse::<RoomType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid type, must be 2D, 3D or VIP");
    }

    #[test]
    fn room_type_round_trips_through_display() {
        for kind in [RoomType::TwoD, RoomType::ThreeD, RoomType::Vip] {
            assert_eq!(kind.to_string().parse::<RoomType>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_non_positive_capacity() {
        for capacity in [0, -5] {
            let err = Room::new("Room A", capacity, RoomType::TwoD).unwrap_err();
            assert_eq!(err.to_string(), "The capacity must be a positive number.");
        }
    }

    #[test]
    fn rejects_blank_name() {
        let err = Room::new("", 50, RoomType::TwoD).unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }
}
