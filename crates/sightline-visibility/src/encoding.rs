//! Packed face-to-face visibility for a single chunk section.
//!
//! A [`PackedVisibility`] is a 6×6 boolean matrix squeezed into one `u64`
//! (see [`crate::layout`]). Queries never walk the matrix: the lanes for the
//! incoming faces are selected with a broadcast mask and OR-folded down into a
//! single lane, which is the set of reachable outgoing faces.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::culling::CullingMode;
use crate::face::Face;
use crate::face_set::FaceSet;
use crate::layout::{
    BROADCAST_MULTIPLIER, CANONICAL_MASK, FACE_COUNT, LANE_LOW_BITS, LANE_MASK, LANES_MASK,
    bit_index, lane_offset,
};
use crate::occlusion_data::{FacePairWords, OcclusionSource};

/// `matrix[from][to]` is `true` when `to` is visible after entering through `from`.
pub type VisibilityMatrix = [[bool; FACE_COUNT]; FACE_COUNT];

impl OcclusionSource for VisibilityMatrix {
    fn is_visible_through(&self, from: Face, to: Face) -> bool {
        self[from.index()][to.index()]
    }
}

/// Bit-packed [`VisibilityMatrix`].
///
/// Plain value type: produced once per section, cached with its render state
/// and read by every traversal step that enters the section.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackedVisibility(u64);

impl PackedVisibility {
    /// No recorded connectivity. Used both for sections without occlusion data
    /// and for sections where every path is blocked.
    pub const NULL: Self = Self(0);

    /// Wraps a raw word without validation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Packs a boolean matrix. Always produces a canonical word.
    pub fn encode(matrix: &VisibilityMatrix) -> Self {
        let mut packed = 0u64;
        for from in Face::ALL {
            for to in Face::ALL {
                if matrix[from.index()][to.index()] {
                    packed |= 1u64 << bit_index(from, to);
                }
            }
        }
        Self(packed)
    }

    /// Unpacks into a boolean matrix. Non-canonical bits are ignored.
    pub fn decode(self) -> VisibilityMatrix {
        let mut matrix = [[false; FACE_COUNT]; FACE_COUNT];
        for from in Face::ALL {
            for to in Face::ALL {
                matrix[from.index()][to.index()] = self.is_visible_through(from, to);
            }
        }
        matrix
    }

    /// Packs occlusion data that only answers per-pair queries.
    ///
    /// Slower than [`Self::extract`]; meant for sources that do not expose the
    /// shared word layout.
    pub fn encode_from<S: OcclusionSource + ?Sized>(source: &S) -> Self {
        let mut matrix = [[false; FACE_COUNT]; FACE_COUNT];
        for from in Face::ALL {
            for to in Face::ALL {
                matrix[from.index()][to.index()] = source.is_visible_through(from, to);
            }
        }
        let packed = Self::encode(&matrix);
        trace!(packed = ?packed, "encoded visibility from per-pair source");
        packed
    }

    /// Reinterprets the first word of a face-pair bitset.
    ///
    /// The bitset already uses the lane layout, so the word is returned as-is.
    /// An empty bitset yields [`Self::NULL`].
    pub fn extract<W: FacePairWords + ?Sized>(bits: &W) -> Self {
        match bits.words().first() {
            Some(&word) => {
                if word & !CANONICAL_MASK != 0 {
                    trace!("extracted non-canonical visibility word {word:#x}");
                }
                Self(word)
            }
            None => Self::NULL,
        }
    }

    pub const fn is_visible_through(self, from: Face, to: Face) -> bool {
        (self.0 >> bit_index(from, to)) & 1 != 0
    }

    /// Faces visible after entering through `from`.
    pub const fn lane(self, from: Face) -> FaceSet {
        FaceSet::from_bits(((self.0 >> lane_offset(from)) & LANE_MASK) as u8)
    }

    /// `true` when no bit outside the lane payloads is set.
    pub const fn is_canonical(self) -> bool {
        self.0 & !CANONICAL_MASK == 0
    }

    /// Clears every bit outside the lane payloads.
    pub const fn canonical(self) -> Self {
        Self(self.0 & CANONICAL_MASK)
    }

    /// Faces reachable from at least one incoming face.
    pub const fn outgoing_from_any(self) -> FaceSet {
        fold_lanes(self.0 & LANES_MASK)
    }

    /// Faces reachable from any face in `incoming`.
    pub const fn outgoing_from(self, incoming: FaceSet) -> FaceSet {
        fold_lanes(self.0 & lane_select_mask(incoming))
    }

    /// Outgoing faces as seen by a traversal running in `mode`.
    ///
    /// With culling disabled every face is reachable regardless of the data.
    pub const fn outgoing(self, incoming: FaceSet, mode: CullingMode) -> FaceSet {
        self.outgoing_from(incoming).union(mode.modifier())
    }
}

/// Expands every set bit of `incoming` into a full `0xFF` lane.
#[inline]
const fn lane_select_mask(incoming: FaceSet) -> u64 {
    let spread = BROADCAST_MULTIPLIER * incoming.bits() as u64;
    (spread & LANE_LOW_BITS) * 0xFF
}

/// ORs all six lanes together and keeps the payload bits of the result.
#[inline]
const fn fold_lanes(data: u64) -> FaceSet {
    let mut folded = data;
    folded |= folded >> 32; // lanes 4,5 onto 0,1
    folded |= folded >> 16; // lanes 2,3 onto 0,1
    folded |= folded >> 8; // lane 1 onto 0
    FaceSet::from_bits((folded & LANE_MASK) as u8)
}

impl From<u64> for PackedVisibility {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<PackedVisibility> for u64 {
    fn from(packed: PackedVisibility) -> Self {
        packed.0
    }
}

impl fmt::Debug for PackedVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedVisibility({:#014x})", self.0)
    }
}

impl fmt::Display for PackedVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#014x}", self.0)
    }
}
