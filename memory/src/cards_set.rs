use crate::Card;

/// A compact set of [`Card`]s.
///
/// ```
/// use memory::{card, CardsSet};
/// let mut set = CardsSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CardsSet`.
/// set = set.insert(card!("7♥"));
/// set = set.insert(card!("7♥"));  // Inserting a second time has no effect
/// assert!(set.contains(card!("7♥")));
/// assert!(!set.contains(card!("2♥")));
/// ```
///
/// # Note on immutability
///
/// This is an immutable type, so its "mutating" methods return a
/// new value instead of really mutating in-place.
/// It is also [`Copy`], so a value is not consumed by methods with `self` receiver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardsSet {
    // Only the low 52 bits are used.
    bits: u64,
}

impl CardsSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(self, card: Card) -> bool {
        (self.bits & (1u64 << card.to_index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, card: Card) -> Self {
        Self {
            bits: self.bits | (1u64 << card.to_index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, ALL_CARDS};

    #[test]
    fn full_deck() {
        let set = ALL_CARDS.iter().fold(CardsSet::new(), |set, &card| set.insert(card));
        assert!(ALL_CARDS.iter().all(|&card| set.contains(card)));
        assert_eq!(set.bits.count_ones(), 52);
    }

    #[test]
    fn contains_after_insert() {
        let set = CardsSet::new().insert(card!("Q♣"));
        assert!(set.contains(card!("Q♣")));
        assert!(!set.contains(card!("Q♦")));
        assert_eq!(set.insert(card!("Q♣")), set);
    }
}
