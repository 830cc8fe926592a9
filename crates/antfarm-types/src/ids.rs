//! Type-safe identifiers.
//!
//! Ants carry a UUID v7 identity so log lines from different rooms can be
//! correlated. Colonies are addressed externally by a sequential integer,
//! and rooms by their position in the farm's creation order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AntId(pub Uuid);

impl AntId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AntId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AntId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally visible colony number.
///
/// Colony IDs are handed out sequentially starting at [`ColonyId::FIRST`]
/// and are never reused, even after every ant in the colony has died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColonyId(pub u32);

impl ColonyId {
    /// The first colony ID assigned by a fresh farm.
    pub const FIRST: Self = Self(1);

    /// Return the ID that follows this one, or `None` on overflow.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Return the raw integer value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ColonyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for ColonyId {
    type Error = core::num::TryFromIntError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value).map(Self)
    }
}

/// Position of a room in the farm's creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl RoomId {
    /// Return the index into the farm's room list.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl core::fmt::Display for RoomId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "room-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colony_ids_start_at_one_and_advance() {
        assert_eq!(ColonyId::FIRST.get(), 1);
        assert_eq!(ColonyId::FIRST.next(), Some(ColonyId(2)));
        assert_eq!(ColonyId(u32::MAX).next(), None);
    }

    #[test]
    fn colony_id_rejects_negative_integers() {
        assert!(ColonyId::try_from(-1_i64).is_err());
        assert_eq!(ColonyId::try_from(7_i64).ok(), Some(ColonyId(7)));
        assert!(ColonyId::try_from(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn ant_ids_are_unique() {
        assert_ne!(AntId::new(), AntId::new());
    }

    #[test]
    fn display_formats() {
        assert_eq!(ColonyId(12).to_string(), "12");
        assert_eq!(RoomId(3).to_string(), "room-3");
    }
}
