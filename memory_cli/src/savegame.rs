use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use memory::{validate_selection, Assignment, Card, Coordinate, Game, RevealState, Selection};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Everything needed to continue a game later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub player: String,
    pub board_size: usize,
    pub assignment: Vec<Vec<Card>>,
    pub revealed: Vec<Vec<bool>>,
    /// At most one card, since games are saved between selections.
    pub selection: Vec<Coordinate>,
    pub moves: u32,
}

impl SaveGame {
    pub fn capture(player: &str, game: &Game) -> Self {
        Self {
            player: String::from(player),
            board_size: game.size(),
            assignment: game.assignment().rows().map(|row| row.to_vec()).collect(),
            revealed: game.reveal_state().rows().map(|row| row.to_vec()).collect(),
            selection: game.selection().as_slice().to_vec(),
            moves: game.moves(),
        }
    }

    /// Writes the save next to `path` first and then renames it into place,
    /// so an existing save is only replaced by a complete one.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        let tmp_path = path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        drop(writer);
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("No saved game at '{}'", path.display());
        }
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks that the saved state could have come out of a real game, and
    /// returns the player together with the restored game.
    pub fn into_game(self) -> Result<(String, Game), LoadError> {
        let assignment = Assignment::from_rows(self.assignment)?;
        if assignment.size() != self.board_size {
            return Err(LoadError::SizeMismatch {
                declared: self.board_size,
                actual: assignment.size(),
            });
        }
        let reveal_state = RevealState::from_rows(self.revealed)?;
        reveal_state.check_against(&assignment)?;
        // Finished games are recorded, never saved
        if reveal_state.is_game_over() {
            return Err(LoadError::AlreadyFinished);
        }

        let selection = match self.selection.as_slice() {
            [] => Selection::new(),
            &[coordinate] => {
                let coordinate =
                    validate_selection(coordinate.get(), &reveal_state, &Selection::new())
                        .map_err(|err| LoadError::IllegalSelection {
                            coordinate: coordinate.get(),
                            err,
                        })?;
                Selection::from_coordinates(vec![coordinate]).unwrap_or_default()
            }
            _ => {
                return Err(LoadError::TooManySelected {
                    count: self.selection.len(),
                })
            }
        };

        // Every revealed or selected card took one move, and finished turns take two
        let revealed = reveal_state.num_revealed();
        let selected = selection.len();
        let moves = self.moves as usize;
        if moves < revealed + selected || moves % 2 != selected % 2 {
            return Err(LoadError::InconsistentMoveCount {
                moves: self.moves,
                revealed,
                selected,
            });
        }

        let game = Game::restore(assignment, reveal_state, selection, self.moves);
        Ok((self.player, game))
    }
}
