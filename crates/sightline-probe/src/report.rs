//! Per-cell query results.

use std::fmt;

use sightline_visibility::{CullingMode, Face, FaceSet, PackedVisibility, VisibilityMatrix};

use crate::scene::CellFixture;

/// Query results for one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellReport {
    pub name: String,
    pub packed: PackedVisibility,
    /// Faces reachable from any incoming face.
    pub reachable_from_any: FaceSet,
    /// Faces reachable from the probed incoming set.
    pub reachable: FaceSet,
    pub matrix: Option<VisibilityMatrix>,
}

/// Encodes `cell` and runs both queries against it.
pub fn probe_cell(
    cell: &CellFixture,
    incoming: FaceSet,
    mode: CullingMode,
    with_matrix: bool,
) -> CellReport {
    let packed = cell.packed();
    CellReport {
        name: cell.name.clone(),
        packed,
        reachable_from_any: packed.outgoing_from_any(),
        reachable: packed.outgoing(incoming, mode),
        matrix: with_matrix.then(|| packed.decode()),
    }
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<16} {}  any={}  reachable={}",
            self.name, self.packed, self.reachable_from_any, self.reachable
        )?;
        if let Some(matrix) = &self.matrix {
            write!(f, "\n{:>16}", "")?;
            for to in Face::ALL {
                write!(f, " {:>5}", to.name())?;
            }
            for from in Face::ALL {
                write!(f, "\n{:>16}", from.name())?;
                for to in Face::ALL {
                    let mark = if matrix[from.index()][to.index()] { "x" } else { "." };
                    write!(f, " {mark:>5}")?;
                }
            }
        }
        Ok(())
    }
}
