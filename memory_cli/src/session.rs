use std::io::{BufRead, Write};

use memory::{final_score, visualize_game, Command, Game, Phase, ScoreModel, SelectionStep};
use tracing::{debug, info};

use crate::console::Console;
use crate::leaderboard::LeaderboardEntry;
use crate::savegame::SaveGame;
use crate::Config;

/// How a session came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished { moves: u32, score: u64 },
    Saved,
    Quit,
}

/// Starts a new game, or continues the saved one if `resume` is set.
///
/// When resuming, the player stored in the save file replaces the configured one.
pub fn start_game(config: &mut Config, resume: bool) -> anyhow::Result<Game> {
    if resume {
        let (player, game) = SaveGame::read(&config.save_path())?.into_game()?;
        info!(player = %player, moves = game.moves(), "Resuming saved game");
        config.player = player;
        Ok(game)
    } else {
        let game = Game::new(config.board_size, &mut config.rng)?;
        info!(player = %config.player, board_size = config.board_size, "Starting new game");
        Ok(game)
    }
}

/// Plays `game` until it is won, saved or abandoned.
///
/// A won game is added to the leaderboard. If it was `resumed` from the save
/// file, that file is removed; any other save is left alone.
/// Returns an error only on I/O failure, not when the player types nonsense.
pub fn play_session<R: BufRead, W: Write>(
    config: &Config,
    console: &mut Console<R, W>,
    mut game: Game,
    resumed: bool,
) -> anyhow::Result<SessionEnd> {
    let n = game.size();
    let num_pairs = n * n / 2;
    let model = ScoreModel::new(n);
    writeln!(
        console.output(),
        "Find all {} pairs. Finish within {} moves for the full {} points.",
        num_pairs,
        model.threshold(),
        model.multiplier()
    )?;

    let mut redraw = true;
    loop {
        if redraw {
            writeln!(console.output(), "\n{}", visualize_game(&game))?;
            writeln!(
                console.output(),
                "Moves: {}  Pairs: {}/{}",
                game.moves(),
                game.pairs_found(),
                num_pairs
            )?;
        }

        match game.phase() {
            Phase::GameOver => break,
            Phase::Resolving => {
                let Some(result) = game.resolve() else {
                    anyhow::bail!("Two cards are face up but the turn cannot be resolved");
                };
                let [first, second] = result.selection;
                debug!(%first, %second, matched = result.matched, moves = game.moves());
                if result.matched {
                    writeln!(console.output(), "It's a match!")?;
                } else {
                    writeln!(console.output(), "No match, the cards are turned back over.")?;
                }
                redraw = true;
            }
            Phase::AwaitingFirstSelection | Phase::AwaitingSecondSelection => {
                let prompt = if game.phase() == Phase::AwaitingFirstSelection {
                    format!("Pick a card (1-{}), s to save, q to quit: ", n * n)
                } else {
                    format!("Pick a second card (1-{}), s to save, q to quit: ", n * n)
                };
                let input = console.read_input(&prompt)?;
                match game.select(input) {
                    SelectionStep::Accepted(_) => redraw = true,
                    SelectionStep::Rejected(err) => {
                        writeln!(console.output(), "{}. Try again.", err)?;
                        redraw = false;
                    }
                    SelectionStep::Command(Command::Save) => {
                        let path = config.save_path();
                        SaveGame::capture(&config.player, &game).write(&path)?;
                        info!(path = %path.display(), moves = game.moves(), "Game saved");
                        writeln!(console.output(), "Game saved. Resume it with --resume.")?;
                        return Ok(SessionEnd::Saved);
                    }
                    SelectionStep::Command(Command::Quit) => {
                        info!(moves = game.moves(), "Game abandoned");
                        writeln!(console.output(), "Goodbye!")?;
                        return Ok(SessionEnd::Quit);
                    }
                }
            }
        }
    }

    let moves = game.moves();
    let score = final_score(moves, n);
    writeln!(
        console.output(),
        "\nCongratulations {}! You found every pair in {} moves and scored {} points.",
        config.player,
        moves,
        score
    )?;

    let entry = LeaderboardEntry {
        player: config.player.clone(),
        score,
        board_size: n,
        date: chrono::Local::now().date_naive(),
    };
    config.leaderboard().append(&entry)?;
    info!(player = %entry.player, score, moves, "Recorded on leaderboard");

    let save_path = config.save_path();
    if resumed && save_path.is_file() {
        std::fs::remove_file(&save_path)?;
        debug!(path = %save_path.display(), "Removed finished save game");
    }

    Ok(SessionEnd::Finished { moves, score })
}
