use memory::{IllegalSelection, InvalidBoard};

#[derive(Debug)]
/// Error type for a save file whose contents cannot be played.
pub enum LoadError {
    SizeMismatch {
        declared: usize,
        actual: usize,
    },
    InvalidBoard(InvalidBoard),
    AlreadyFinished,
    TooManySelected {
        count: usize,
    },
    IllegalSelection {
        coordinate: u32,
        err: IllegalSelection,
    },
    InconsistentMoveCount {
        moves: u32,
        revealed: usize,
        selected: usize,
    },
}

impl From<InvalidBoard> for LoadError {
    fn from(err: InvalidBoard) -> Self {
        LoadError::InvalidBoard(err)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::InvalidBoard(err) => Some(err),
            LoadError::IllegalSelection { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::SizeMismatch { declared, actual } => write!(
                f,
                "Save file declares a {0}x{0} board but contains a {1}x{1} one",
                declared, actual
            ),
            LoadError::InvalidBoard(_) => write!(f, "Save file contains an invalid board"),
            LoadError::AlreadyFinished => {
                write!(f, "Save file holds a game in which every pair is already found")
            }
            LoadError::TooManySelected { count } => write!(
                f,
                "Save file has {} cards face up, but a game can only be saved with at most one",
                count
            ),
            LoadError::IllegalSelection { coordinate, err: _ } => write!(
                f,
                "The face-up card in the save file, {}, cannot be selected",
                coordinate
            ),
            LoadError::InconsistentMoveCount {
                moves,
                revealed,
                selected,
            } => write!(
                f,
                "Save file records {} moves, which cannot reveal {} cards and select {}",
                moves, revealed, selected
            ),
        }
    }
}
