use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    generate_assignment, Assignment, Card, Coordinate, CoordinateMap, Rank, RevealState,
    Selection, Suit, RANKS, SUITS,
};

/// A consistent mid-game position: some pairs matched, and up to two
/// hidden cards selected.
#[derive(Clone, Debug)]
pub struct PlayState {
    pub assignment: Assignment,
    pub reveal_state: RevealState,
    pub selection: Selection,
}

impl Arbitrary for PlayState {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = *g.choose(&[2, 4, 6]).unwrap();
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let assignment = generate_assignment(n, &mut rng).unwrap();

        let mut reveal_state = RevealState::new(n);
        for (pos, &card) in assignment.grid().iter() {
            // Reveal whole pairs only
            if !reveal_state.is_revealed(pos) && bool::arbitrary(g) {
                for (other, &other_card) in assignment.grid().iter() {
                    if other_card == card {
                        reveal_state.reveal(other);
                    }
                }
            }
        }

        let map = CoordinateMap::new(n);
        let hidden: Vec<Coordinate> = map
            .iter()
            .filter(|&(_, pos)| !reveal_state.is_revealed(pos))
            .map(|(c, _)| c)
            .collect();
        let mut selection = Selection::new();
        let num_selected = usize::arbitrary(g) % 3;
        for _ in 0..num_selected {
            if let Some(&c) = g.choose(&hidden) {
                if !selection.contains(c) {
                    selection.push(c);
                }
            }
        }

        PlayState {
            assignment,
            reveal_state,
            selection,
        }
    }
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&SUITS).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&RANKS).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}
