mod console;
mod error;
mod leaderboard;
mod savegame;
mod session;
pub use console::*;
pub use error::*;
pub use leaderboard::*;
pub use savegame::*;
pub use session::*;

use std::path::PathBuf;

use rand::rngs::StdRng;

pub const SAVE_FILE_NAME: &str = "savegame.json";
pub const LEADERBOARD_FILE_NAME: &str = "leaderboard.jsonl";

pub struct Config {
    pub rng: StdRng,
    /// Holds the save game and the leaderboard.
    pub data_dir: PathBuf,
    pub player: String,
    pub board_size: usize,
}

impl Config {
    pub fn new(
        rng: StdRng,
        data_dir: PathBuf,
        player: String,
        board_size: usize,
    ) -> anyhow::Result<Self> {
        if !data_dir.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", data_dir.display());
        }
        Ok(Self {
            rng,
            data_dir,
            player,
            board_size,
        })
    }

    pub fn save_path(&self) -> PathBuf {
        self.data_dir.join(SAVE_FILE_NAME)
    }

    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::new(self.data_dir.join(LEADERBOARD_FILE_NAME))
    }
}
