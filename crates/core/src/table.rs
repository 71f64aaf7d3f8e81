//! The accumulated per-piece, per-orientation offset table.
//!
//! Backed by a flat 7x4 slot matrix indexed by the canonical kind order
//! and the orientation cycle. Slots fill exactly once during a decode
//! pass and are never mutated afterwards.

use piece_tablegen_types::{Orientation, PieceKind, PieceShape};

use crate::error::StructuralInconsistency;

/// Lookup table: 7 piece kinds x 4 orientations, one shape per slot.
///
/// Fully populated (all 28 slots `Some`) is the success invariant of a
/// decode pass; [`PieceTable::missing_slots`] reports how far off an
/// in-progress table is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceTable {
    slots: [[Option<PieceShape>; 4]; 7],
}

impl PieceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape stored for a slot, if that block has been decoded yet
    pub fn get(&self, kind: PieceKind, orientation: Orientation) -> Option<PieceShape> {
        self.slots[kind.index()][orientation.index()]
    }

    /// Store a decoded shape; every slot may be filled exactly once
    pub fn insert(
        &mut self,
        kind: PieceKind,
        orientation: Orientation,
        shape: PieceShape,
    ) -> Result<(), StructuralInconsistency> {
        let slot = &mut self.slots[kind.index()][orientation.index()];
        if slot.is_some() {
            return Err(StructuralInconsistency::DuplicateSlot { kind, orientation });
        }
        *slot = Some(shape);
        Ok(())
    }

    /// Unpopulated slots, in canonical kind then orientation order
    pub fn missing_slots(&self) -> Vec<(PieceKind, Orientation)> {
        let mut missing = Vec::new();
        for kind in PieceKind::ALL {
            for orientation in Orientation::ALL {
                if self.get(kind, orientation).is_none() {
                    missing.push((kind, orientation));
                }
            }
        }
        missing
    }

    /// Whether all 28 slots are populated
    pub fn is_complete(&self) -> bool {
        self.missing_slots().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: PieceShape = [(0, 0), (1, 0), (2, 0), (3, 0)];

    #[test]
    fn slots_fill_exactly_once() {
        let mut table = PieceTable::new();
        table
            .insert(PieceKind::I, Orientation::North, SHAPE)
            .unwrap();
        assert_eq!(table.get(PieceKind::I, Orientation::North), Some(SHAPE));

        let err = table
            .insert(PieceKind::I, Orientation::North, SHAPE)
            .unwrap_err();
        assert_eq!(
            err,
            StructuralInconsistency::DuplicateSlot {
                kind: PieceKind::I,
                orientation: Orientation::North,
            }
        );
    }

    #[test]
    fn missing_slots_count_down_to_complete() {
        let mut table = PieceTable::new();
        assert_eq!(table.missing_slots().len(), 28);
        assert!(!table.is_complete());

        for kind in PieceKind::ALL {
            for orientation in Orientation::ALL {
                table.insert(kind, orientation, SHAPE).unwrap();
            }
        }
        assert!(table.is_complete());
        assert!(table.missing_slots().is_empty());
    }

    #[test]
    fn missing_slots_are_in_canonical_order() {
        let mut table = PieceTable::new();
        for orientation in Orientation::ALL {
            table.insert(PieceKind::Z, orientation, SHAPE).unwrap();
        }

        let missing = table.missing_slots();
        assert_eq!(missing.len(), 24);
        assert_eq!(missing[0], (PieceKind::L, Orientation::North));
        assert_eq!(missing[23], (PieceKind::T, Orientation::West));
    }
}
