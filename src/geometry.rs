//! Directions between neighbouring cells and whole-grid rotations.
//!
//! Edge positions are indexed clockwise from the top: 0=top, 1=right,
//! 2=bottom, 3=left. A quarter turn clockwise moves the edge at position `i`
//! to position `(i + 1) % 4`, which is why a tile's orientation and the
//! number of quarter turns share the same arithmetic.

/// Number of edges on a tile and of quarter turns in a full rotation.
pub const NUM_SIDES: usize = 4;

/// Where a second tile sits relative to the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connection {
    Above,
    Right,
    Below,
    Left,
}

impl Connection {
    /// All four directions in edge-position order.
    pub const ALL: [Self; NUM_SIDES] = [Self::Above, Self::Right, Self::Below, Self::Left];

    /// Oriented edge position on the first tile that faces the second tile.
    #[inline]
    pub const fn edge(self) -> usize {
        match self {
            Self::Above => 0,
            Self::Right => 1,
            Self::Below => 2,
            Self::Left => 3,
        }
    }

    /// Oriented edge position on the second tile that touches the first.
    #[inline]
    pub const fn facing_edge(self) -> usize {
        (self.edge() + 2) % NUM_SIDES
    }

    /// The direction pointing back from the second tile to the first.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Right => Self::Left,
            Self::Below => Self::Above,
            Self::Left => Self::Right,
        }
    }
}

/// A clockwise rotation of a whole `rows x cols` grid by some quarter turns.
///
/// Rotating the grid moves every cell and also turns every tile in it, so the
/// tile orientation advances by `quarter_turns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRotation {
    pub quarter_turns: usize,
}

impl GridRotation {
    /// Rotations that map a `rows x cols` grid onto a grid of the same shape.
    ///
    /// Quarter and three-quarter turns only qualify when the grid is square.
    pub fn preserving(rows: usize, cols: usize) -> Vec<Self> {
        (0..NUM_SIDES)
            .filter(|turns| turns % 2 == 0 || rows == cols)
            .map(|quarter_turns| Self { quarter_turns })
            .collect()
    }

    /// Destination of source cell `(row, col)` in a `rows x cols` grid.
    pub const fn apply(self, rows: usize, cols: usize, row: usize, col: usize) -> (usize, usize) {
        match self.quarter_turns % NUM_SIDES {
            0 => (row, col),
            1 => (col, rows - 1 - row),
            2 => (rows - 1 - row, cols - 1 - col),
            _ => (cols - 1 - col, row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_edges_are_opposite() {
        assert_eq!(Connection::Above.facing_edge(), 2);
        assert_eq!(Connection::Right.facing_edge(), 3);
        assert_eq!(Connection::Below.facing_edge(), 0);
        assert_eq!(Connection::Left.facing_edge(), 1);
        for connection in Connection::ALL {
            assert_eq!(connection.opposite().edge(), connection.facing_edge());
            assert_eq!(connection.opposite().opposite(), connection);
        }
    }

    #[test]
    fn test_rectangular_grid_keeps_half_turn_only() {
        let turns: Vec<usize> = GridRotation::preserving(2, 3)
            .iter()
            .map(|rotation| rotation.quarter_turns)
            .collect();
        assert_eq!(turns, vec![0, 2]);
        assert_eq!(GridRotation::preserving(3, 3).len(), 4);
    }

    #[test]
    fn test_grid_rotations_are_permutations() {
        for (rows, cols) in [(3, 3), (2, 3), (1, 4)] {
            for rotation in GridRotation::preserving(rows, cols) {
                let mut seen = vec![false; rows * cols];
                for row in 0..rows {
                    for col in 0..cols {
                        let (r, c) = rotation.apply(rows, cols, row, col);
                        assert!(r < rows && c < cols, "{rotation:?} moved ({row},{col}) out of bounds");
                        assert!(!seen[r * cols + c], "{rotation:?} maps two cells to ({r},{c})");
                        seen[r * cols + c] = true;
                    }
                }
            }
        }
    }

    #[test]
    fn test_quarter_turn_moves_top_row_to_right_column() {
        let rotation = GridRotation { quarter_turns: 1 };
        assert_eq!(rotation.apply(3, 3, 0, 0), (0, 2));
        assert_eq!(rotation.apply(3, 3, 0, 2), (2, 2));
        assert_eq!(rotation.apply(3, 3, 2, 0), (0, 0));
    }
}
