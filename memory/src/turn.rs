use crate::{Assignment, Coordinate, CoordinateMap, RevealState};

/// Compares the two selected cards and returns the reveal state after the turn,
/// along with whether the cards matched.
///
/// On a match both cells are revealed; otherwise the state comes back
/// unchanged. Picking the same cell twice is never a match. The order of the
/// two coordinates does not matter.
///
/// Panics if a coordinate is not on the board; validate selections first
/// with [`validate_selection()`](crate::validate_selection).
pub fn resolve_turn(
    assignment: &Assignment,
    reveal_state: &RevealState,
    selection: [Coordinate; 2],
) -> (RevealState, bool) {
    let map = CoordinateMap::new(assignment.size());
    let [first, second] = selection.map(|c| {
        map.position(c)
            .unwrap_or_else(|| panic!("Coordinate {} is not on a {1}x{1} board", c, map.size()))
    });

    let mut next = reveal_state.clone();
    let matched = first != second && assignment.card(first) == assignment.card(second);
    if matched {
        next.reveal(first);
        next.reveal(second);
    }
    (next, matched)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PlayState;
    use crate::{card, is_game_over};

    fn c(raw: u32) -> Coordinate {
        Coordinate::new(raw).unwrap()
    }

    fn all_pairs(n: usize) -> Vec<[Coordinate; 2]> {
        let coordinates: Vec<_> = CoordinateMap::new(n).coordinates().collect();
        let mut pairs = Vec::new();
        for &a in &coordinates {
            for &b in &coordinates {
                pairs.push([a, b]);
            }
        }
        pairs
    }

    quickcheck! {
        fn match_is_symmetric(state: PlayState) -> bool {
            all_pairs(state.assignment.size()).into_iter().all(|[a, b]| {
                resolve_turn(&state.assignment, &state.reveal_state, [a, b])
                    == resolve_turn(&state.assignment, &state.reveal_state, [b, a])
            })
        }

        fn revealed_cells_stay_revealed(state: PlayState, picks: Vec<(u8, u8)>) -> bool {
            let n = state.assignment.size();
            let num_cells = (n * n) as u32;
            let mut reveal_state = state.reveal_state.clone();
            for (a, b) in picks {
                let pair = [c(u32::from(a) % num_cells + 1), c(u32::from(b) % num_cells + 1)];
                let (next, _) = resolve_turn(&state.assignment, &reveal_state, pair);
                let lost_any = reveal_state
                    .grid()
                    .iter()
                    .any(|(pos, &revealed)| revealed && !next.is_revealed(pos));
                if lost_any {
                    return false;
                }
                reveal_state = next;
            }
            true
        }

        fn resolving_twice_changes_nothing(state: PlayState, a: u8, b: u8) -> bool {
            let n = state.assignment.size();
            let num_cells = (n * n) as u32;
            let pair = [c(u32::from(a) % num_cells + 1), c(u32::from(b) % num_cells + 1)];
            let (once, matched_once) = resolve_turn(&state.assignment, &state.reveal_state, pair);
            let (twice, matched_twice) = resolve_turn(&state.assignment, &once, pair);
            once == twice && matched_once == matched_twice
        }
    }

    #[test]
    fn two_by_two_game() {
        let assignment = Assignment::from_rows(vec![
            vec![card!("A♠"), card!("K♥")],
            vec![card!("K♥"), card!("A♠")],
        ])
        .unwrap();
        let state = RevealState::new(2);

        let (state, matched) = resolve_turn(&assignment, &state, [c(1), c(4)]);
        assert!(matched);
        assert_eq!(
            state,
            RevealState::from_rows(vec![vec![true, false], vec![false, true]]).unwrap()
        );
        assert!(!is_game_over(&state));

        let (state, matched) = resolve_turn(&assignment, &state, [c(2), c(3)]);
        assert!(matched);
        assert!(is_game_over(&state));
    }

    #[test]
    fn mismatch_leaves_state_alone() {
        let assignment = Assignment::from_rows(vec![
            vec![card!("A♠"), card!("K♥")],
            vec![card!("K♥"), card!("A♠")],
        ])
        .unwrap();
        let state = RevealState::new(2);
        let (next, matched) = resolve_turn(&assignment, &state, [c(1), c(2)]);
        assert!(!matched);
        assert_eq!(next, state);
    }

    #[test]
    fn same_cell_is_not_a_match() {
        let assignment = Assignment::from_rows(vec![
            vec![card!("A♠"), card!("K♥")],
            vec![card!("K♥"), card!("A♠")],
        ])
        .unwrap();
        let (next, matched) = resolve_turn(&assignment, &RevealState::new(2), [c(1), c(1)]);
        assert!(!matched);
        assert_eq!(next.num_revealed(), 0);
    }

    #[test]
    #[should_panic]
    fn off_board_coordinate_panics() {
        let assignment = Assignment::from_rows(vec![
            vec![card!("A♠"), card!("K♥")],
            vec![card!("K♥"), card!("A♠")],
        ])
        .unwrap();
        resolve_turn(&assignment, &RevealState::new(2), [c(1), c(5)]);
    }
}
