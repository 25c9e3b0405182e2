mod error;
mod grid;

use std::collections::BTreeMap;

pub use error::*;
pub use grid::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, CardsSet, Coordinate, CoordinateMap, Position, ALL_CARDS, NUM_CARDS};

/// The hidden card behind every cell of the board.
///
/// Every card on it appears exactly twice. Once created, an assignment is
/// never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    grid: Grid<Card>,
}

/// Which cells have been permanently revealed by a match.
///
/// Cells only ever go from hidden to revealed, and only in matched pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealState {
    grid: Grid<bool>,
}

/// Checks that an `n` x `n` board can be filled with distinct pairs.
pub fn check_board_size(n: usize) -> Result<(), InvalidBoardSize> {
    let num_cells = n.checked_mul(n).ok_or(InvalidBoardSize { n })?;
    if num_cells % 2 != 0 || num_cells / 2 > NUM_CARDS {
        return Err(InvalidBoardSize { n });
    }
    Ok(())
}

/// Deals a new random board of size `n`.
///
/// Draws `n * n / 2` distinct cards from the deck, duplicates them, and
/// shuffles the pairs over the grid. Fails before allocating anything if
/// `n` is not a playable size.
pub fn generate_assignment<R: Rng + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<Assignment, InvalidBoardSize> {
    check_board_size(n)?;
    let num_pairs = n * n / 2;

    let mut drawn = CardsSet::new();
    let mut cards = Vec::with_capacity(2 * num_pairs);
    while cards.len() < num_pairs {
        let card = ALL_CARDS[rng.gen_range(0..NUM_CARDS)];
        if drawn.contains(card) {
            continue;
        }
        drawn = drawn.insert(card);
        cards.push(card);
    }
    cards.extend_from_within(..);
    cards.shuffle(rng);

    // The size check above guarantees the cell count
    let grid = Grid::from_cells(n, cards).ok_or(InvalidBoardSize { n })?;
    Ok(Assignment { grid })
}

/// A reveal state for a new game, with every cell hidden.
pub fn generate_initial_state(n: usize) -> RevealState {
    RevealState::new(n)
}

/// Whether every cell has been revealed, i.e. the game is won.
pub fn is_game_over(reveal_state: &RevealState) -> bool {
    reveal_state.is_game_over()
}

impl Assignment {
    /// Builds an assignment from existing rows, checking that it is square,
    /// of a playable size, and that every card appears exactly twice.
    pub fn from_rows(rows: Vec<Vec<Card>>) -> Result<Self, InvalidBoard> {
        let n = rows.len();
        check_board_size(n)?;
        let mut cells = Vec::with_capacity(n * n);
        for (row, cards) in rows.into_iter().enumerate() {
            if cards.len() != n {
                return Err(InvalidBoard::NotSquare {
                    n,
                    row,
                    len: cards.len(),
                });
            }
            cells.extend(cards);
        }
        Self::from_cells(n, cells)
    }

    /// Like [`Assignment::from_rows`], with the cells already flattened in row-major order.
    pub fn from_cells(n: usize, cells: Vec<Card>) -> Result<Self, InvalidBoard> {
        check_board_size(n)?;
        let found = cells.len();
        let grid = Grid::from_cells(n, cells).ok_or(InvalidBoard::WrongCellCount {
            expected: n * n,
            found,
        })?;

        let mut counts = BTreeMap::<Card, usize>::new();
        for &card in grid.cells() {
            *counts.entry(card).or_default() += 1;
        }
        if let Some((&card, &count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(InvalidBoard::UnpairedCard { card, count });
        }

        Ok(Self { grid })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid<Card> {
        &self.grid
    }

    pub fn card(&self, pos: Position) -> Card {
        self.grid[pos]
    }

    pub fn card_at(&self, coordinate: Coordinate) -> Option<Card> {
        let pos = CoordinateMap::new(self.size()).position(coordinate)?;
        self.grid.get(pos).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.grid.rows()
    }
}

impl RevealState {
    pub fn new(n: usize) -> Self {
        Self {
            grid: Grid::from_fn(n, |_| false),
        }
    }

    /// Builds a reveal state from existing rows.
    ///
    /// This only checks the shape; use [`RevealState::check_against`] to
    /// make sure it fits an assignment.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, InvalidBoard> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, revealed) in rows.into_iter().enumerate() {
            if revealed.len() != n {
                return Err(InvalidBoard::NotSquare {
                    n,
                    row,
                    len: revealed.len(),
                });
            }
            cells.extend(revealed);
        }
        let found = cells.len();
        let grid = Grid::from_cells(n, cells).ok_or(InvalidBoard::WrongCellCount {
            expected: n * n,
            found,
        })?;
        Ok(Self { grid })
    }

    /// Checks that this state could have been reached by playing on `assignment`:
    /// same size, and both cards of a pair are either revealed or hidden.
    pub fn check_against(&self, assignment: &Assignment) -> Result<(), InvalidBoard> {
        if self.size() != assignment.size() {
            return Err(InvalidBoard::SizeMismatch {
                assignment: assignment.size(),
                reveal_state: self.size(),
            });
        }
        let mut revealed_counts = BTreeMap::<Card, usize>::new();
        for (pos, &revealed) in self.grid.iter() {
            if revealed {
                *revealed_counts.entry(assignment.card(pos)).or_default() += 1;
            }
        }
        match revealed_counts.into_iter().find(|&(_, count)| count != 2) {
            Some((card, _)) => Err(InvalidBoard::HalfRevealedPair { card }),
            None => Ok(()),
        }
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    pub fn is_revealed(&self, pos: Position) -> bool {
        self.grid[pos]
    }

    /// Returns `None` for coordinates outside the board.
    pub fn is_revealed_at(&self, coordinate: Coordinate) -> Option<bool> {
        let pos = CoordinateMap::new(self.size()).position(coordinate)?;
        self.grid.get(pos).copied()
    }

    pub fn num_revealed(&self) -> usize {
        self.grid.cells().iter().filter(|&&revealed| revealed).count()
    }

    pub fn is_game_over(&self) -> bool {
        self.grid.cells().iter().all(|&revealed| revealed)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.grid.rows()
    }

    pub(crate) fn reveal(&mut self, pos: Position) {
        self.grid[pos] = true;
    }
}
