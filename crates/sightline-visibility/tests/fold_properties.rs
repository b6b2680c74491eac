//! Exhaustive checks of the fold queries against a naive walk of the matrix.

use sightline_visibility::{
    FACE_COUNT, Face, FacePairBits, FaceSet, OcclusionSource, PackedVisibility, VisibilityMatrix,
};

fn empty() -> VisibilityMatrix {
    [[false; FACE_COUNT]; FACE_COUNT]
}

fn full() -> VisibilityMatrix {
    [[true; FACE_COUNT]; FACE_COUNT]
}

fn identity() -> VisibilityMatrix {
    let mut matrix = empty();
    for face in Face::ALL {
        matrix[face.index()][face.index()] = true;
    }
    matrix
}

fn single_row(from: Face) -> VisibilityMatrix {
    let mut matrix = empty();
    matrix[from.index()] = [true; FACE_COUNT];
    matrix
}

/// Straight-through sight-lines only: every face sees its opposite.
fn tunnels() -> VisibilityMatrix {
    let mut matrix = empty();
    for face in Face::ALL {
        matrix[face.index()][face.opposite().index()] = true;
    }
    matrix
}

/// Deterministic pseudo-random matrix from a 36-bit seed.
fn from_seed(seed: u64) -> VisibilityMatrix {
    let mut matrix = empty();
    for from in Face::ALL {
        for to in Face::ALL {
            let bit = from.index() * FACE_COUNT + to.index();
            matrix[from.index()][to.index()] = (seed >> bit) & 1 != 0;
        }
    }
    matrix
}

fn representative_matrices() -> Vec<VisibilityMatrix> {
    let mut matrices = vec![empty(), full(), identity(), tunnels()];
    matrices.extend(Face::ALL.map(single_row));
    let mut seed = 0x9E37_79B9_7F4A_7C15_u64;
    for _ in 0..32 {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        matrices.push(from_seed(seed >> 20));
    }
    matrices
}

fn naive_outgoing(matrix: &VisibilityMatrix, incoming: FaceSet) -> FaceSet {
    let mut out = FaceSet::NONE;
    for from in incoming {
        for to in Face::ALL {
            if matrix[from.index()][to.index()] {
                out.insert(to);
            }
        }
    }
    out
}

fn all_subsets() -> impl Iterator<Item = FaceSet> {
    (0..64u8).map(FaceSet::from_bits)
}

#[test]
fn test_encode_sets_exactly_the_matrix_bits() {
    for matrix in representative_matrices() {
        let packed = PackedVisibility::encode(&matrix);
        assert!(packed.is_canonical());
        for from in Face::ALL {
            for to in Face::ALL {
                let bit = (packed.raw() >> (from.index() * 8 + to.index())) & 1 != 0;
                assert_eq!(bit, matrix[from.index()][to.index()], "{from} -> {to}");
            }
        }
        assert_eq!(packed.decode(), matrix);
    }
}

#[test]
fn test_outgoing_from_any_matches_naive() {
    for matrix in representative_matrices() {
        let packed = PackedVisibility::encode(&matrix);
        assert_eq!(packed.outgoing_from_any(), naive_outgoing(&matrix, FaceSet::ALL));
    }
}

#[test]
fn test_outgoing_from_matches_naive_for_every_subset() {
    for matrix in representative_matrices() {
        let packed = PackedVisibility::encode(&matrix);
        for incoming in all_subsets() {
            assert_eq!(
                packed.outgoing_from(incoming),
                naive_outgoing(&matrix, incoming),
                "packed {packed:?}, incoming {incoming}"
            );
        }
    }
}

#[test]
fn test_outgoing_from_all_equals_outgoing_from_any() {
    let raw_words = [
        0,
        1,
        0x0000_3F3F_3F3F_3F3F,
        0xFFFF_FFFF_FFFF_FFFF,
        0x8000_0000_0000_0001,
        0x0000_C000_0000_0000,
        0x0123_4567_89AB_CDEF,
    ];
    for raw in raw_words {
        let packed = PackedVisibility::from_raw(raw);
        assert_eq!(packed.outgoing_from(FaceSet::ALL), packed.outgoing_from_any());
    }
    for matrix in representative_matrices() {
        let packed = PackedVisibility::encode(&matrix);
        assert_eq!(packed.outgoing_from(FaceSet::ALL), packed.outgoing_from_any());
    }
}

#[test]
fn test_empty_incoming_and_null_yield_nothing() {
    for matrix in representative_matrices() {
        let packed = PackedVisibility::encode(&matrix);
        assert_eq!(packed.outgoing_from(FaceSet::NONE), FaceSet::NONE);
    }
    for incoming in all_subsets() {
        assert_eq!(PackedVisibility::NULL.outgoing_from(incoming), FaceSet::NONE);
    }
    assert_eq!(PackedVisibility::NULL.outgoing_from_any(), FaceSet::NONE);
}

#[test]
fn test_extract_agrees_with_encode() {
    for matrix in representative_matrices() {
        let mut bits = FacePairBits::new();
        for from in Face::ALL {
            for to in Face::ALL {
                if matrix.is_visible_through(from, to) {
                    bits.set_visible_through(from, to);
                }
            }
        }
        let extracted = PackedVisibility::extract(&bits);
        assert_eq!(extracted, PackedVisibility::encode(&matrix));
        assert_eq!(extracted, PackedVisibility::encode_from(&bits));
        assert_eq!(bits.is_empty(), extracted.is_null());
    }
}

#[test]
fn test_extract_known_first_word() {
    let bits = FacePairBits::from_words(vec![0x0000_0102_0408_1020, 0xFFFF]);
    assert_eq!(PackedVisibility::extract(&bits).raw(), 0x0000_0102_0408_1020);
    assert_eq!(PackedVisibility::extract(&FacePairBits::new()), PackedVisibility::NULL);
}
