use serde::{Deserialize, Serialize};

/// The 1-based number the player types to pick a cell.
///
/// Coordinates are laid out row-major: `coordinate = row * n + col + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(u32);

impl Coordinate {
    /// Wraps a raw number. Returns `None` for zero, which is never a coordinate.
    ///
    /// This does not check the upper bound, which depends on the board size.
    pub fn new(raw: u32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell of the grid, as zero-based matrix indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Converts between [`Coordinate`]s and [`Position`]s on an `n` x `n` board.
///
/// Both directions are computed arithmetically, so there is no lookup table
/// that could be missing a key. Use [`CoordinateMap::iter`] when the whole
/// mapping is needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CoordinateMap {
    n: usize,
}

impl CoordinateMap {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// The number of cells, which is also the largest coordinate.
    pub fn num_cells(&self) -> usize {
        self.n * self.n
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (coordinate.0 as usize) <= self.num_cells()
    }

    pub fn position(&self, coordinate: Coordinate) -> Option<Position> {
        if !self.contains(coordinate) {
            return None;
        }
        let idx = coordinate.0 as usize - 1;
        Some(Position {
            row: idx / self.n,
            col: idx % self.n,
        })
    }

    pub fn coordinate(&self, position: Position) -> Option<Coordinate> {
        if position.row >= self.n || position.col >= self.n {
            return None;
        }
        let raw = position.row * self.n + position.col + 1;
        Some(Coordinate(u32::try_from(raw).ok()?))
    }

    /// All coordinates with their positions, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Position)> + '_ {
        (0..self.num_cells()).map(move |idx| {
            (
                Coordinate(idx as u32 + 1),
                Position {
                    row: idx / self.n,
                    col: idx % self.n,
                },
            )
        })
    }

    /// All coordinates, in ascending order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.iter().map(|(coordinate, _)| coordinate)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn coordinate_roundtrip(n: u8, raw: u32) -> bool {
            let map = CoordinateMap::new(usize::from(n % 12));
            match Coordinate::new(raw % 200) {
                None => true,
                Some(c) => match map.position(c) {
                    Some(pos) => map.coordinate(pos) == Some(c),
                    None => c.get() as usize > map.num_cells(),
                },
            }
        }

        fn position_roundtrip(n: u8, row: u8, col: u8) -> bool {
            let map = CoordinateMap::new(usize::from(n % 12));
            let pos = Position::new(usize::from(row % 14), usize::from(col % 14));
            match map.coordinate(pos) {
                Some(c) => map.position(c) == Some(pos),
                None => pos.row >= map.size() || pos.col >= map.size(),
            }
        }
    }

    #[test]
    fn row_major_layout() {
        let map = CoordinateMap::new(4);
        assert_eq!(map.position(Coordinate(1)), Some(Position::new(0, 0)));
        assert_eq!(map.position(Coordinate(4)), Some(Position::new(0, 3)));
        assert_eq!(map.position(Coordinate(5)), Some(Position::new(1, 0)));
        assert_eq!(map.position(Coordinate(16)), Some(Position::new(3, 3)));
        assert_eq!(map.position(Coordinate(17)), None);
        assert_eq!(map.coordinate(Position::new(2, 1)), Coordinate::new(10));
        assert_eq!(map.coordinate(Position::new(4, 0)), None);
    }

    #[test]
    fn iter_covers_every_cell_once() {
        let map = CoordinateMap::new(6);
        let all: Vec<_> = map.iter().collect();
        assert_eq!(all.len(), 36);
        for (c, pos) in all {
            assert_eq!(map.position(c), Some(pos));
        }
    }

    #[test]
    fn zero_is_not_a_coordinate() {
        assert_eq!(Coordinate::new(0), None);
    }
}
