//! Face-to-face visibility encoding for chunk sections.
//!
//! Geometry analysis decides, for every ordered pair of faces, whether a
//! sight-line can cross a section. This crate packs that 6×6 matrix into a
//! single `u64` and answers the question occlusion culling asks on every step
//! of its graph walk: given the faces a section was entered through, which
//! faces can be left through?

pub mod culling;
pub mod encoding;
pub mod face;
pub mod face_set;
pub mod layout;
pub mod occlusion_data;

pub use culling::CullingMode;
pub use encoding::{PackedVisibility, VisibilityMatrix};
pub use face::{Face, FaceError};
pub use face_set::{FaceSet, FaceSetIter};
pub use layout::{FACE_COUNT, LANE_STRIDE};
pub use occlusion_data::{FacePairBits, FacePairWords, OcclusionSource};
