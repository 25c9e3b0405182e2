use crate::{Assignment, CoordinateMap, Game, RevealState, Selection};

/// Draws the board as a box of cells.
///
/// Matched and currently selected cards show their face; every other cell
/// shows the coordinate to type for it.
pub fn visualize_board(
    assignment: &Assignment,
    reveal_state: &RevealState,
    selection: &Selection,
) -> String {
    let map = CoordinateMap::new(assignment.size());
    let n = map.size();
    // Wide enough for "10♥" and for the largest coordinate
    let width = map.num_cells().to_string().len().max(3);
    let inner = n * (width + 1) + 1;

    let mut result = String::from("╭");
    result += &"─".repeat(inner);
    result += "╮\n";
    for (coordinate, pos) in map.iter() {
        if pos.col == 0 {
            result += "│";
        }
        let face_up = reveal_state.is_revealed(pos) || selection.contains(coordinate);
        let label = if face_up {
            assignment.card(pos).to_string()
        } else {
            coordinate.to_string()
        };
        result += &format!(" {:>width$}", label, width = width);
        if pos.col + 1 == n {
            result += " │\n";
        }
    }
    result += "╰";
    result += &"─".repeat(inner);
    result += "╯";
    result
}

pub fn visualize_game(game: &Game) -> String {
    visualize_board(game.assignment(), game.reveal_state(), game.selection())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, Coordinate};

    #[test]
    fn hidden_cells_show_coordinates() {
        let assignment = Assignment::from_rows(vec![
            vec![card!("A♠"), card!("T♥")],
            vec![card!("T♥"), card!("A♠")],
        ])
        .unwrap();
        let reveal_state = RevealState::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        let selection = Selection::from_coordinates(vec![Coordinate::new(3).unwrap()]).unwrap();

        let expected = "\
╭─────────╮
│  A♠   2 │
│ 10♥  A♠ │
╰─────────╯";
        assert_eq!(visualize_board(&assignment, &reveal_state, &selection), expected);
    }

    #[test]
    fn new_game_is_all_coordinates() {
        let game = Game::from_assignment(
            Assignment::from_rows(vec![
                vec![card!("2♦"), card!("3♦")],
                vec![card!("3♦"), card!("2♦")],
            ])
            .unwrap(),
        );
        let drawing = visualize_game(&game);
        for label in ["1", "2", "3", "4"] {
            assert!(drawing.contains(label));
        }
        assert!(!drawing.contains('♦'));
    }
}
