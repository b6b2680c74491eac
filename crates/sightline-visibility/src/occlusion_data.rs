//! Face-pair bitset produced by section geometry analysis.
//!
//! [`FacePairBits`] stores one bit per `(from, to)` pair at
//! [`bit_index`](crate::layout::bit_index), growing word by word and trimmed so
//! that an empty set owns no storage. Because it uses the same lane layout as
//! [`crate::PackedVisibility`], its first word can be reinterpreted directly.

use crate::face::Face;
use crate::layout::bit_index;

/// Reports whether one face of a section can see another through it.
///
/// This is the per-pair query form of section occlusion data.
pub trait OcclusionSource {
    fn is_visible_through(&self, from: Face, to: Face) -> bool;
}

/// Word-level view of a face-pair bitset.
///
/// Implementors must lay out bit `from * 8 + to` of word 0 as the `(from, to)`
/// pair and must return an empty slice when no bit is set.
pub trait FacePairWords {
    fn words(&self) -> &[u64];
}

/// Growable face-pair bitset using the shared lane layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacePairBits {
    words: Vec<u64>,
}

impl FacePairBits {
    /// Creates an empty bitset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bitset from raw words. Trailing zero words are dropped.
    pub fn from_words(words: Vec<u64>) -> Self {
        let mut bits = Self { words };
        bits.trim();
        bits
    }

    /// Records that `to` is visible when entering through `from`.
    pub fn set_visible_through(&mut self, from: Face, to: Face) {
        self.set_bit(bit_index(from, to));
    }

    /// Marks every pair as visible (an empty section).
    pub fn set_all(&mut self) {
        for from in Face::ALL {
            for to in Face::ALL {
                self.set_visible_through(from, to);
            }
        }
    }

    /// Highest set bit plus one, or zero when the set is empty.
    pub fn len(&self) -> usize {
        match self.words.last() {
            Some(&last) => (self.words.len() - 1) * 64 + (64 - last.leading_zeros() as usize),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn set_bit(&mut self, bit: usize) {
        let word = bit / 64;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1u64 << (bit % 64);
    }

    fn get_bit(&self, bit: usize) -> bool {
        self.words
            .get(bit / 64)
            .is_some_and(|word| word & (1u64 << (bit % 64)) != 0)
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

impl OcclusionSource for FacePairBits {
    fn is_visible_through(&self, from: Face, to: Face) -> bool {
        self.get_bit(bit_index(from, to))
    }
}

impl FacePairWords for FacePairBits {
    fn words(&self) -> &[u64] {
        &self.words
    }
}

impl FacePairWords for [u64] {
    fn words(&self) -> &[u64] {
        self
    }
}

impl FacePairWords for Vec<u64> {
    fn words(&self) -> &[u64] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let bits = FacePairBits::new();
        assert!(bits.is_empty());
        assert_eq!(bits.len(), 0);
        assert!(bits.words().is_empty());
    }

    #[test]
    fn test_set_and_query_pair() {
        let mut bits = FacePairBits::new();
        bits.set_visible_through(Face::Down, Face::Up);
        assert!(bits.is_visible_through(Face::Down, Face::Up));
        assert!(!bits.is_visible_through(Face::Up, Face::Down));
        assert_eq!(bits.len(), 2);
        assert_eq!(bits.words(), &[0b10]);
    }

    #[test]
    fn test_len_tracks_highest_bit() {
        let mut bits = FacePairBits::new();
        bits.set_visible_through(Face::East, Face::East);
        assert_eq!(bits.len(), 46);
        bits.set_visible_through(Face::Down, Face::Down);
        assert_eq!(bits.len(), 46);
    }

    #[test]
    fn test_from_words_trims_trailing_zeros() {
        let bits = FacePairBits::from_words(vec![0, 0, 0]);
        assert!(bits.is_empty());

        let bits = FacePairBits::from_words(vec![0x1234, 0]);
        assert_eq!(bits.words(), &[0x1234]);
        assert_eq!(bits.len(), 13);
    }

    #[test]
    fn test_set_all_covers_every_pair() {
        let mut bits = FacePairBits::new();
        bits.set_all();
        for from in Face::ALL {
            for to in Face::ALL {
                assert!(bits.is_visible_through(from, to));
            }
        }
        assert_eq!(bits.words(), &[0x0000_3F3F_3F3F_3F3F]);
    }

    #[test]
    fn test_query_past_storage_is_false() {
        let bits = FacePairBits::from_words(vec![1]);
        assert!(!bits.is_visible_through(Face::East, Face::West));
    }
}
