//! Whether a traversal honours section occlusion data.

use serde::{Deserialize, Serialize};

use crate::face_set::FaceSet;

/// Culling mode of the traversal that consumes visibility queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CullingMode {
    /// Only faces reachable through the section's geometry are followed.
    #[default]
    Occlusion,
    /// Every face is followed; occlusion data is ignored.
    Disabled,
}

impl CullingMode {
    /// Maps the config flag onto a mode.
    pub const fn from_enabled(occlusion_culling: bool) -> Self {
        if occlusion_culling {
            Self::Occlusion
        } else {
            Self::Disabled
        }
    }

    /// Faces added unconditionally to every outgoing set.
    pub const fn modifier(self) -> FaceSet {
        match self {
            Self::Occlusion => FaceSet::NONE,
            Self::Disabled => FaceSet::ALL,
        }
    }
}
