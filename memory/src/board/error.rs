use crate::{Card, NUM_CARDS};

/// The error type for [`generate_assignment()`](crate::generate_assignment).
///
/// A board needs an even number of cells, and no more pairs than there are
/// distinct cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidBoardSize {
    pub n: usize,
}

impl std::error::Error for InvalidBoardSize {}

impl std::fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A {0}x{0} board is not playable: it needs an even number of cells and at most {1} pairs",
            self.n, NUM_CARDS
        )
    }
}

/// The error type for building boards out of existing data, e.g. a save file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidBoard {
    Size(InvalidBoardSize),
    NotSquare { n: usize, row: usize, len: usize },
    WrongCellCount { expected: usize, found: usize },
    UnpairedCard { card: Card, count: usize },
    SizeMismatch { assignment: usize, reveal_state: usize },
    HalfRevealedPair { card: Card },
}

impl From<InvalidBoardSize> for InvalidBoard {
    fn from(err: InvalidBoardSize) -> Self {
        InvalidBoard::Size(err)
    }
}

impl std::error::Error for InvalidBoard {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidBoard::Size(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoard::Size(_) => write!(f, "Board has an unplayable size"),
            InvalidBoard::NotSquare { n, row, len } =>
                write!(f, "Row {} has {} cells, but the board has {} rows", row, len, n),
            InvalidBoard::WrongCellCount { expected, found } =>
                write!(f, "Expected {} cells, found {}", expected, found),
            InvalidBoard::UnpairedCard { card, count } =>
                write!(f, "Card {} appears {} times instead of exactly twice", card, count),
            InvalidBoard::SizeMismatch { assignment, reveal_state } =>
                write!(f, "Assignment is {0}x{0} but reveal state is {1}x{1}", assignment, reveal_state),
            InvalidBoard::HalfRevealedPair { card } =>
                write!(f, "Only one card of the pair {} is revealed", card),
        }
    }
}
