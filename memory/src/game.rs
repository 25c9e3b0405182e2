use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use rand::Rng;

use crate::{
    available_coordinates, generate_assignment, resolve_turn, validate_selection, Assignment,
    Coordinate, IllegalSelection, InvalidBoardSize, RevealState, ScoreModel, Selection,
};

/// Where a [`Game`] is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingFirstSelection,
    AwaitingSecondSelection,
    /// Two cards are face up and [`Game::resolve()`] must be called.
    Resolving,
    GameOver,
}

/// One line of player input, as interpreted by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    Coordinate(u32),
    Save,
    Quit,
    /// Anything else. Treated like a coordinate that is not on the board.
    Malformed,
}

/// A request to leave the game, which the caller carries out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Save,
    Quit,
}

/// The outcome of offering one [`PlayerInput`] to [`Game::select()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStep {
    Accepted(Coordinate),
    /// Nothing changed; ask again.
    Rejected(IllegalSelection),
    Command(Command),
}

/// Summarizes the outcome of a resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnResult {
    pub selection: [Coordinate; 2],
    pub matched: bool,
    pub game_over: bool,
}

/// A single game of memory, from the first card to the last pair.
///
/// The game only sequences turns: it never renders or reads input, and save
/// and quit requests are handed back to the caller as [`Command`]s.
#[derive(Clone, Debug)]
pub struct Game {
    assignment: Assignment,
    reveal_state: RevealState,
    selection: Selection,
    moves: u32,
    phase: Phase,
}

impl FromStr for PlayerInput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let input = if s.eq_ignore_ascii_case("s") || s.eq_ignore_ascii_case("save") {
            PlayerInput::Save
        } else if s.eq_ignore_ascii_case("q") || s.eq_ignore_ascii_case("quit") {
            PlayerInput::Quit
        } else {
            s.parse::<u32>()
                .map_or(PlayerInput::Malformed, PlayerInput::Coordinate)
        };
        Ok(input)
    }
}

impl Game {
    /// Deals a new `n` x `n` board.
    pub fn new<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self, InvalidBoardSize> {
        Ok(Self::from_assignment(generate_assignment(n, rng)?))
    }

    /// Starts a game on a given board, with every card hidden.
    pub fn from_assignment(assignment: Assignment) -> Self {
        let reveal_state = RevealState::new(assignment.size());
        Self::restore(assignment, reveal_state, Selection::new(), 0)
    }

    /// Continues a game from saved state.
    ///
    /// With exactly one card pending, the game waits for the second card;
    /// otherwise any pending cards are dropped and a fresh turn starts.
    /// The state is assumed to be consistent, see
    /// [`RevealState::check_against()`] and [`validate_selection()`].
    pub fn restore(
        assignment: Assignment,
        reveal_state: RevealState,
        mut selection: Selection,
        moves: u32,
    ) -> Self {
        let phase = if reveal_state.is_game_over() {
            selection.clear();
            Phase::GameOver
        } else if selection.len() == 1 {
            Phase::AwaitingSecondSelection
        } else {
            selection.clear();
            Phase::AwaitingFirstSelection
        };
        Self {
            assignment,
            reveal_state,
            selection,
            moves,
            phase,
        }
    }

    /// Offers one input in either selection phase.
    ///
    /// A valid coordinate is turned face up and counts as a move. Anything
    /// rejected leaves the game exactly as it was.
    pub fn select(&mut self, input: PlayerInput) -> SelectionStep {
        let raw = match input {
            PlayerInput::Save => return SelectionStep::Command(Command::Save),
            PlayerInput::Quit => return SelectionStep::Command(Command::Quit),
            PlayerInput::Malformed => {
                return SelectionStep::Rejected(IllegalSelection::OutOfRange)
            }
            PlayerInput::Coordinate(raw) => raw,
        };
        if !matches!(
            self.phase,
            Phase::AwaitingFirstSelection | Phase::AwaitingSecondSelection
        ) {
            return SelectionStep::Rejected(IllegalSelection::NotAcceptingSelections);
        }

        match validate_selection(raw, &self.reveal_state, &self.selection) {
            Ok(coordinate) => {
                self.selection.push(coordinate);
                self.moves += 1;
                self.phase = if self.selection.is_full() {
                    Phase::Resolving
                } else {
                    Phase::AwaitingSecondSelection
                };
                SelectionStep::Accepted(coordinate)
            }
            Err(err) => SelectionStep::Rejected(err),
        }
    }

    /// Resolves the two face-up cards. Returns `None` outside [`Phase::Resolving`].
    pub fn resolve(&mut self) -> Option<TurnResult> {
        if self.phase != Phase::Resolving {
            return None;
        }
        let selection = self.selection.pair()?;
        let (reveal_state, matched) = resolve_turn(&self.assignment, &self.reveal_state, selection);
        self.reveal_state = reveal_state;
        self.selection.clear();

        let game_over = self.reveal_state.is_game_over();
        self.phase = if game_over {
            Phase::GameOver
        } else {
            Phase::AwaitingFirstSelection
        };
        Some(TurnResult {
            selection,
            matched,
            game_over,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn size(&self) -> usize {
        self.assignment.size()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal_state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> usize {
        self.reveal_state.num_revealed() / 2
    }

    pub fn available_coordinates(&self) -> BTreeSet<Coordinate> {
        available_coordinates(&self.reveal_state, &self.selection)
    }

    /// The number of moves it took, once the game is over.
    pub fn final_moves(&self) -> Option<u32> {
        (self.phase == Phase::GameOver).then_some(self.moves)
    }

    /// The score, once the game is over.
    pub fn score(&self) -> Option<f64> {
        let moves = self.final_moves()?;
        Some(ScoreModel::new(self.size()).score(moves))
    }
}
