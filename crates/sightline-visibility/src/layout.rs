//! Bit layout shared by [`crate::PackedVisibility`] and [`crate::FacePairBits`].
//!
//! A visibility word holds one 8-bit lane per `from` face, starting at bit
//! `from * LANE_STRIDE`. Inside a lane, bit `to` records whether `to` is
//! visible when entering through `from`. Only the low [`FACE_COUNT`] bits of a
//! lane carry data; the top two are always zero in canonical words.
//!
//! The stride is wider than the lane's payload so that the single multiply in
//! [`crate::PackedVisibility::outgoing_from`] can broadcast a face set into
//! whole-lane masks without carries crossing lanes. Changing either constant
//! requires re-deriving [`LANE_LOW_BITS`] and the fold shifts.

use static_assertions::const_assert;

use crate::face::Face;

/// Number of faces, and number of lanes in a visibility word.
pub const FACE_COUNT: usize = 6;

/// Distance in bits between the starts of two adjacent lanes.
pub const LANE_STRIDE: usize = 8;

/// Payload bits of a single lane.
pub const LANE_MASK: u64 = (1 << FACE_COUNT) - 1;

/// The lowest bit of every lane: `0x0000_0101_0101_0101`.
pub const LANE_LOW_BITS: u64 = repeat_per_lane(1);

/// Every payload bit of every lane. Bits outside this mask never appear in a
/// canonical visibility word.
pub const CANONICAL_MASK: u64 = repeat_per_lane(LANE_MASK);

/// All eight bits of every lane, i.e. the low `FACE_COUNT * LANE_STRIDE` bits.
pub const LANES_MASK: u64 = repeat_per_lane(0xFF);

/// Multiplier that spreads a face set across the lanes.
///
/// Copy `k` of the set is shifted by `k * (LANE_STRIDE - 1)`, which moves the
/// set's bit `k` onto bit `k * LANE_STRIDE`, the low bit of lane `k`. The copies
/// never overlap, so the product has no carries.
pub const BROADCAST_MULTIPLIER: u64 = repeat_with_stride(1, LANE_STRIDE - 1);

const_assert!(LANE_STRIDE > FACE_COUNT);
const_assert!(FACE_COUNT * LANE_STRIDE <= u64::BITS as usize);

/// Bit position of the `(from, to)` pair.
#[inline]
pub const fn bit_index(from: Face, to: Face) -> usize {
    from.index() * LANE_STRIDE + to.index()
}

/// Bit offset of the first bit of `from`'s lane.
#[inline]
pub const fn lane_offset(from: Face) -> usize {
    from.index() * LANE_STRIDE
}

const fn repeat_per_lane(pattern: u64) -> u64 {
    repeat_with_stride(pattern, LANE_STRIDE)
}

const fn repeat_with_stride(pattern: u64, stride: usize) -> u64 {
    let mut value = 0;
    let mut lane = 0;
    while lane < FACE_COUNT {
        value |= pattern << (lane * stride);
        lane += 1;
    }
    value
}
