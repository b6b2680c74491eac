//! The six faces bounding a chunk section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::FACE_COUNT;

/// One of the six faces of a cubic cell.
///
/// The `repr(u8)` discriminant is the face's bit index inside a
/// [`super::FaceSet`] and its lane number inside a
/// [`super::PackedVisibility`]. The order must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    /// −Y face.
    Down = 0,
    /// +Y face.
    Up = 1,
    /// −Z face.
    North = 2,
    /// +Z face.
    South = 3,
    /// −X face.
    West = 4,
    /// +X face.
    East = 5,
}

/// Errors produced when narrowing raw values into a [`Face`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FaceError {
    /// The index is outside `0..6`.
    #[error("face index {0} is out of range (expected 0..6)")]
    InvalidIndex(usize),
    /// The name does not match any face.
    #[error("unknown face name: {0:?}")]
    UnknownName(String),
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = FACE_COUNT;

    /// All six faces in canonical order.
    pub const ALL: [Face; FACE_COUNT] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Returns the face index (0–5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a face.
    pub fn from_index(index: usize) -> Result<Self, FaceError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(FaceError::InvalidIndex(index))
    }

    /// Checked narrowing from a raw byte. Returns `None` for values `>= 6`.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Down),
            1 => Some(Self::Up),
            2 => Some(Self::North),
            3 => Some(Self::South),
            4 => Some(Self::West),
            5 => Some(Self::East),
            _ => None,
        }
    }

    /// Returns the face on the other side of the cell.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Returns the step `(dx, dy, dz)` to the neighboring cell across this face.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = FaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(FaceError::InvalidIndex(value as usize))
    }
}

impl FromStr for Face {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FaceError::UnknownName(trimmed.to_string()))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
