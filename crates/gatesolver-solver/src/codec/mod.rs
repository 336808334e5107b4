//! Bit-packed state keys.
//!
//! Every piece contributes one fixed-width atom, `id | y | x`, each field
//! written least significant bit first. A full-state key concatenates the
//! atoms of all pieces in ascending id order; a subset key concatenates the
//! atoms of the chosen pieces only. Keys depend on piece positions alone,
//! so two states reached along different paths pack identically.

mod bits;

use gatesolver_core::{Position, PuzzleState};

pub use bits::BitVector;

/// Bits needed to distinguish `n` values: `ceil(log2(n))`, zero for `n <= 1`.
///
/// ```
/// use gatesolver_solver::codec::bits_for;
///
/// assert_eq!(bits_for(1), 0);
/// assert_eq!(bits_for(2), 1);
/// assert_eq!(bits_for(5), 3);
/// assert_eq!(bits_for(8), 3);
/// ```
pub fn bits_for(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Bit length of a full-state key for the given puzzle dimensions.
pub fn packed_size(piece_count: usize, rows: usize, width: usize) -> usize {
    StateCodec::new(piece_count, rows, width).packed_size()
}

/// A packed key: full state or a subset of pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackedStateKey(BitVector);

impl PackedStateKey {
    #[inline]
    pub fn bits(&self) -> &BitVector {
        &self.0
    }

    /// Length in bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Storage length in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.0.byte_len()
    }
}

/// Field widths for one puzzle, fixed for a whole search run.
///
/// # Example
///
/// ```
/// use gatesolver_core::parse_map;
/// use gatesolver_solver::codec::StateCodec;
///
/// let state = parse_map("WWWWWW\nWP01GW\nWWWWWW").unwrap();
/// let codec = StateCodec::for_state(&state);
///
/// // 1 id bit, 2 row bits, 3 column bits per piece
/// assert_eq!(codec.atom_bits(), 6);
/// assert_eq!(codec.packed_size(), 12);
/// assert_eq!(codec.encode(&state).byte_len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCodec {
    piece_count: usize,
    id_bits: u32,
    y_bits: u32,
    x_bits: u32,
}

impl StateCodec {
    pub fn new(piece_count: usize, rows: usize, width: usize) -> Self {
        Self {
            piece_count,
            id_bits: bits_for(piece_count),
            y_bits: bits_for(rows),
            x_bits: bits_for(width),
        }
    }

    pub fn for_state(state: &PuzzleState) -> Self {
        Self::new(state.piece_count(), state.rows(), state.width())
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.piece_count
    }

    /// Bits per piece.
    #[inline]
    pub fn atom_bits(&self) -> usize {
        (self.id_bits + self.y_bits + self.x_bits) as usize
    }

    /// Bits in a full-state key.
    #[inline]
    pub fn packed_size(&self) -> usize {
        self.atom_bits() * self.piece_count
    }

    /// Packs every piece of `state`.
    pub fn encode(&self, state: &PuzzleState) -> PackedStateKey {
        let mut bits = BitVector::new(self.packed_size());
        let mut offset = 0;
        for (id, &pos) in state.pieces().iter().enumerate() {
            offset = self.write_atom(&mut bits, offset, id, pos);
        }
        PackedStateKey(bits)
    }

    /// Packs only the pieces listed in `pieces`, in the given order.
    pub fn encode_subset(&self, state: &PuzzleState, pieces: &[usize]) -> PackedStateKey {
        let positions = state.pieces();
        let mut bits = BitVector::new(self.atom_bits() * pieces.len());
        let mut offset = 0;
        for &id in pieces {
            offset = self.write_atom(&mut bits, offset, id, positions[id]);
        }
        PackedStateKey(bits)
    }

    /// Unpacks a full-state key into positions indexed by piece id.
    pub fn decode(&self, key: &PackedStateKey) -> Vec<Position> {
        let mut positions = vec![Position::new(0, 0); self.piece_count];
        let atom = self.atom_bits();
        for start in (0..key.len()).step_by(atom.max(1)) {
            let bits = key.bits();
            let id = bits.read_bits(start, self.id_bits);
            let y = bits.read_bits(start + self.id_bits as usize, self.y_bits);
            let x = bits.read_bits(start + (self.id_bits + self.y_bits) as usize, self.x_bits);
            if let Some(slot) = positions.get_mut(id) {
                *slot = Position::new(x, y);
            }
        }
        positions
    }

    fn write_atom(&self, bits: &mut BitVector, offset: usize, id: usize, pos: Position) -> usize {
        let offset = bits.write_bits(offset, id, self.id_bits);
        let offset = bits.write_bits(offset, pos.y, self.y_bits);
        bits.write_bits(offset, pos.x, self.x_bits)
    }
}
