//! Structural-inconsistency tests: every malformed input aborts the whole
//! decode; no partial table ever escapes.

use piece_tablegen::core::{decode_str, StructuralInconsistency};
use piece_tablegen::types::{Orientation, PieceKind};

const DIAGRAM: &str = include_str!("fixtures/orientation.txt");

#[test]
fn row_with_two_letters_fails_the_decode() {
    let poisoned = DIAGRAM.replacen("[z,z, , ]", "[z,s, , ]", 1);
    let err = decode_str(&poisoned).unwrap_err();
    assert!(matches!(
        err,
        StructuralInconsistency::MixedRow {
            first: 'z',
            second: 's',
            ..
        }
    ));
}

#[test]
fn row_with_an_unknown_letter_fails_the_decode() {
    let poisoned = DIAGRAM.replacen("[z,z, , ]", "[z,x, , ]", 1);
    let err = decode_str(&poisoned).unwrap_err();
    assert!(matches!(err, StructuralInconsistency::UnknownLetter { .. }));
}

#[test]
fn block_with_three_cells_fails_the_decode() {
    // Blank out one cell of the z spawn block.
    let poisoned = DIAGRAM.replacen("[ ,z,z, ]", "[ ,z, , ]", 1);
    let err = decode_str(&poisoned).unwrap_err();
    assert_eq!(
        err,
        StructuralInconsistency::CellCount {
            kind: PieceKind::Z,
            orientation: Orientation::North,
            count: 3,
        }
    );
}

#[test]
fn truncated_input_names_the_missing_slots() {
    let cut = DIAGRAM.find("The s tetromino").unwrap();
    let err = decode_str(&DIAGRAM[..cut]).unwrap_err();

    match &err {
        StructuralInconsistency::Incomplete { missing } => {
            // z, l and o decoded; s, i, j and t are gone.
            assert_eq!(missing.len(), 16);
            for kind in [PieceKind::S, PieceKind::I, PieceKind::J, PieceKind::T] {
                for orientation in Orientation::ALL {
                    assert!(missing.contains(&(kind, orientation)));
                }
            }
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
    assert!(err.to_string().contains("s/0"));
}

#[test]
fn input_ending_mid_block_fails_the_decode() {
    // Keep everything up to and including the first row of the z east
    // block: one full block plus one dangling row.
    let cut = DIAGRAM.find("[ , ,z, ]").unwrap() + "[ , ,z, ]".len();
    let err = decode_str(&DIAGRAM[..cut]).unwrap_err();
    assert_eq!(err, StructuralInconsistency::TruncatedBlock { rows_seen: 1 });
}

#[test]
fn duplicate_piece_group_fails_the_decode() {
    let extra = "[z,z, , ]\n[ ,z,z, ]\n[ , , , ]\n[ , , , ]\n";
    let poisoned = format!("{DIAGRAM}{extra}");
    let err = decode_str(&poisoned).unwrap_err();
    assert_eq!(
        err,
        StructuralInconsistency::DuplicateSlot {
            kind: PieceKind::Z,
            orientation: Orientation::North,
        }
    );
}

#[test]
fn noise_between_rows_of_a_block_is_tolerated() {
    let noisy = DIAGRAM.replacen(
        "[z,z, , ]\n[ ,z,z, ]",
        "[z,z, , ]\nsee the guideline note below\n[ ,z,z, ]",
        1,
    );
    let table = decode_str(&noisy).unwrap();
    assert_eq!(
        table.get(PieceKind::Z, Orientation::North),
        Some([(1, 2), (2, 2), (0, 3), (1, 3)])
    );
}
