/// The constants that turn a move count into a score on an `n` x `n` board.
///
/// Finishing within [`threshold`](ScoreModel::threshold) moves earns the full
/// [`multiplier`](ScoreModel::multiplier). Beyond that the score falls off
/// with the square of the move count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreModel {
    n: usize,
}

impl ScoreModel {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// A perfect game: every pair found on the first try, two moves each.
    pub fn min_moves(&self) -> u64 {
        (self.n * self.n) as u64
    }

    /// Wasted moves that are forgiven: 20% of the cells, rounded up to whole pairs.
    pub fn buffer(&self) -> u64 {
        // ceil_to_even(n² / 5) == 2 * ceil(n² / 10)
        2 * self.min_moves().div_ceil(10)
    }

    pub fn threshold(&self) -> u64 {
        self.min_moves() + self.buffer()
    }

    pub fn multiplier(&self) -> u64 {
        if self.n < 4 {
            200 * self.n as u64
        } else {
            self.min_moves().div_ceil(10) * 1000
        }
    }

    pub fn score(&self, total_moves: u32) -> f64 {
        let total_moves = u64::from(total_moves);
        let threshold = self.threshold();
        let multiplier = self.multiplier() as f64;
        if total_moves <= threshold {
            return multiplier;
        }
        let ratio = threshold as f64 / total_moves as f64;
        multiplier * ratio * ratio
    }
}

/// Converts the number of moves taken on an `n` x `n` board to a score.
///
/// See [`ScoreModel`] for the formula.
pub fn moves_to_score(total_moves: u32, n: usize) -> f64 {
    ScoreModel::new(n).score(total_moves)
}

/// The score as it is shown and stored: the fractional part is dropped.
pub fn final_score(total_moves: u32, n: usize) -> u64 {
    moves_to_score(total_moves, n) as u64
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn plateau_then_decreasing(n: u8, moves: u16) -> bool {
            let n = usize::from(n % 10) + 1;
            let model = ScoreModel::new(n);
            let moves = u32::from(moves);
            let score = model.score(moves);
            if u64::from(moves) <= model.threshold() {
                score == model.multiplier() as f64
            } else {
                score < model.score(moves - 1) && score > 0.0
            }
        }
    }

    #[test]
    fn four_by_four() {
        let model = ScoreModel::new(4);
        assert_eq!(model.min_moves(), 16);
        assert_eq!(model.buffer(), 4);
        assert_eq!(model.threshold(), 20);
        assert_eq!(model.multiplier(), 2000);
        assert_eq!(moves_to_score(18, 4), 2000.0);
        assert_eq!(moves_to_score(20, 4), 2000.0);
        assert_eq!(moves_to_score(40, 4), 500.0);
        assert!(moves_to_score(21, 4) < 2000.0);
    }

    #[test]
    fn larger_boards() {
        // 36 cells: buffer ceil_even(7.2) = 8, multiplier ceil(3.6) * 1000
        let six = ScoreModel::new(6);
        assert_eq!(six.threshold(), 44);
        assert_eq!(six.multiplier(), 4000);

        // 64 cells: buffer ceil_even(12.8) = 14, multiplier ceil(6.4) * 1000
        let eight = ScoreModel::new(8);
        assert_eq!(eight.threshold(), 78);
        assert_eq!(eight.multiplier(), 7000);
        assert_eq!(final_score(156, 8), 1750);
    }

    #[test]
    fn small_boards_use_linear_multiplier() {
        let two = ScoreModel::new(2);
        assert_eq!(two.multiplier(), 400);
        assert_eq!(two.threshold(), 6);
        assert_eq!(moves_to_score(12, 2), 100.0);
    }

    #[test]
    fn truncates() {
        // 2000 * 400 / 441 = 1814.05...
        assert_eq!(final_score(21, 4), 1814);
    }
}
