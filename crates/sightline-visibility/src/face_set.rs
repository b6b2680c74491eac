//! Bitset over the six faces of a cell.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

use crate::face::Face;
use crate::layout::LANE_MASK;

/// Set of faces stored in the low six bits of a byte.
///
/// Bit `n` corresponds to the face whose index is `n`. Bits 6 and 7 are
/// always zero.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Face>", into = "Vec<Face>")]
pub struct FaceSet(u8);

impl FaceSet {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// All six faces.
    pub const ALL: Self = Self(LANE_MASK as u8);

    /// Builds the union of the given faces.
    pub const fn of(faces: &[Face]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < faces.len() {
            bits |= 1 << faces[i] as u8;
            i += 1;
        }
        Self(bits)
    }

    /// Set containing only `face`.
    pub const fn single(face: Face) -> Self {
        Self(1 << face as u8)
    }

    /// Builds a set from raw bits, discarding anything above bit 5.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, face: Face) -> bool {
        (self.0 >> face as u8) & 1 != 0
    }

    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face as u8;
    }

    pub fn remove(&mut self, face: Face) {
        self.0 &= !(1 << face as u8);
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Faces not in `self`.
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of faces in the set (0–6).
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the faces in ascending index order.
    pub fn iter(self) -> FaceSetIter {
        FaceSetIter(self.0)
    }
}

/// Iterator over the faces of a [`FaceSet`].
///
/// Pops the lowest set bit on every step, so it runs once per member rather
/// than once per face.
#[derive(Clone, Debug)]
pub struct FaceSetIter(u8);

impl Iterator for FaceSetIter {
    type Item = Face;

    fn next(&mut self) -> Option<Face> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Face::from_u8(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FaceSetIter {}

impl IntoIterator for FaceSet {
    type Item = Face;
    type IntoIter = FaceSetIter;

    fn into_iter(self) -> FaceSetIter {
        self.iter()
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut set = Self::NONE;
        for face in iter {
            set.insert(face);
        }
        set
    }
}

impl From<Face> for FaceSet {
    fn from(face: Face) -> Self {
        Self::single(face)
    }
}

impl From<Vec<Face>> for FaceSet {
    fn from(faces: Vec<Face>) -> Self {
        faces.into_iter().collect()
    }
}

impl From<FaceSet> for Vec<Face> {
    fn from(set: FaceSet) -> Self {
        set.iter().collect()
    }
}

impl BitOr for FaceSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FaceSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for FaceSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for FaceSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for FaceSet {
    type Output = Self;

    fn not(self) -> Self {
        self.complement()
    }
}

impl fmt::Debug for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, face) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{face}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_and_all() {
        assert!(FaceSet::NONE.is_empty());
        assert_eq!(FaceSet::NONE.len(), 0);
        assert_eq!(FaceSet::ALL.bits(), 0b11_1111);
        assert_eq!(FaceSet::ALL.len(), 6);
        for face in Face::ALL {
            assert!(FaceSet::ALL.contains(face));
            assert!(!FaceSet::NONE.contains(face));
        }
    }

    #[test]
    fn test_of_matches_individual_inserts() {
        let mut set = FaceSet::NONE;
        for face in Face::ALL {
            set.insert(face);
        }
        assert_eq!(set, FaceSet::ALL);
        assert_eq!(FaceSet::of(&Face::ALL), FaceSet::ALL);
        assert_eq!(FaceSet::of(&[Face::Up, Face::Up]), FaceSet::single(Face::Up));
    }

    #[test]
    fn test_contains_uses_face_bit() {
        let set = FaceSet::of(&[Face::North, Face::East]);
        assert_eq!(set.bits(), 0b10_0100);
        assert!(set.contains(Face::North));
        assert!(set.contains(Face::East));
        assert!(!set.contains(Face::South));
    }

    #[test]
    fn test_from_bits_discards_high_bits() {
        assert_eq!(FaceSet::from_bits(0xFF), FaceSet::ALL);
        assert_eq!(FaceSet::from_bits(0b1100_0001).bits(), 0b1);
    }

    #[test]
    fn test_remove_and_complement() {
        let mut set = FaceSet::ALL;
        set.remove(Face::Down);
        set.remove(Face::Down);
        assert_eq!(set.len(), 5);
        assert_eq!(!set, FaceSet::single(Face::Down));
        assert_eq!(!FaceSet::NONE, FaceSet::ALL);
        assert_eq!(FaceSet::ALL.complement(), FaceSet::NONE);
    }

    #[test]
    fn test_operators() {
        let a = FaceSet::of(&[Face::Down, Face::Up]);
        let b = FaceSet::of(&[Face::Up, Face::West]);
        assert_eq!(a | b, FaceSet::of(&[Face::Down, Face::Up, Face::West]));
        assert_eq!(a & b, FaceSet::single(Face::Up));

        let mut c = a;
        c |= b;
        c &= FaceSet::of(&[Face::Down, Face::West]);
        assert_eq!(c, FaceSet::of(&[Face::Down, Face::West]));
    }

    #[test]
    fn test_iter_ascending_and_exact_size() {
        let set = FaceSet::of(&[Face::East, Face::Down, Face::South]);
        let iter = set.iter();
        assert_eq!(iter.len(), 3);
        let faces: Vec<Face> = iter.collect();
        assert_eq!(faces, vec![Face::Down, Face::South, Face::East]);
        assert_eq!(FaceSet::NONE.iter().next(), None);
    }

    #[test]
    fn test_collect_roundtrip() {
        for bits in 0..64u8 {
            let set = FaceSet::from_bits(bits);
            let collected: FaceSet = set.into_iter().collect();
            assert_eq!(collected, set);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FaceSet::NONE.to_string(), "{}");
        assert_eq!(FaceSet::of(&[Face::Up, Face::West]).to_string(), "{up, west}");
    }
}
