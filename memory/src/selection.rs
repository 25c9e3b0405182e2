use std::collections::BTreeSet;

use crate::{Coordinate, CoordinateMap, RevealState};

/// The cards turned face up in the current turn, in the order they were picked.
///
/// Holds at most two distinct coordinates. Selected cards are not revealed:
/// once the turn is resolved the selection is cleared, and only the
/// [`RevealState`] decides what stays visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    coordinates: Vec<Coordinate>,
}

/// Why a coordinate cannot be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalSelection {
    /// Not a cell of the board. Unparseable input ends up here too.
    OutOfRange,
    AlreadyRevealed,
    AlreadySelected,
    /// A turn is waiting to be resolved, or the game has ended.
    NotAcceptingSelections,
}

impl std::error::Error for IllegalSelection {}

impl std::fmt::Display for IllegalSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalSelection::OutOfRange => write!(f, "That is not a card on the board"),
            IllegalSelection::AlreadyRevealed => write!(f, "That card has already been matched"),
            IllegalSelection::AlreadySelected => write!(f, "That card is already face up"),
            IllegalSelection::NotAcceptingSelections => {
                write!(f, "No card can be selected right now")
            }
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from existing coordinates, e.g. from a save file.
    ///
    /// Returns `None` for more than two coordinates or a repeated one.
    pub fn from_coordinates(coordinates: Vec<Coordinate>) -> Option<Self> {
        let valid = match coordinates.as_slice() {
            [] | [_] => true,
            [a, b] => a != b,
            _ => false,
        };
        valid.then_some(Self { coordinates })
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.coordinates.len() == 2
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.coordinates.contains(&coordinate)
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// The selected pair, once two cards have been picked.
    pub fn pair(&self) -> Option<[Coordinate; 2]> {
        match self.coordinates.as_slice() {
            &[first, second] => Some([first, second]),
            _ => None,
        }
    }

    pub(crate) fn push(&mut self, coordinate: Coordinate) {
        debug_assert!(!self.is_full() && !self.contains(coordinate));
        self.coordinates.push(coordinate);
    }

    pub(crate) fn clear(&mut self) {
        self.coordinates.clear();
    }
}

/// All coordinates that may be picked next: neither revealed nor already selected.
pub fn available_coordinates(
    reveal_state: &RevealState,
    selection: &Selection,
) -> BTreeSet<Coordinate> {
    let map = CoordinateMap::new(reveal_state.size());
    map.iter()
        .filter(|&(coordinate, pos)| {
            !reveal_state.is_revealed(pos) && !selection.contains(coordinate)
        })
        .map(|(coordinate, _)| coordinate)
        .collect()
}

/// Checks whether the raw number `candidate` may be picked next.
///
/// A revealed card is reported as such even if it is somehow also selected.
pub fn validate_selection(
    candidate: u32,
    reveal_state: &RevealState,
    selection: &Selection,
) -> Result<Coordinate, IllegalSelection> {
    let coordinate = Coordinate::new(candidate).ok_or(IllegalSelection::OutOfRange)?;
    match reveal_state.is_revealed_at(coordinate) {
        None => Err(IllegalSelection::OutOfRange),
        Some(true) => Err(IllegalSelection::AlreadyRevealed),
        Some(false) if selection.contains(coordinate) => Err(IllegalSelection::AlreadySelected),
        Some(false) => Ok(coordinate),
    }
}
