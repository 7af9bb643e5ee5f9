use rand::Rng;

/// Source of every random decision the crate makes.
///
/// It is implemented for every [`rand::Rng`], so a thread rng or a seeded
/// `StdRng` can be passed straight in. Tests that need to assert exact squad
/// composition implement it by hand.
pub trait Randomness {
    /// A uniformly chosen index in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Randomness for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Fisher-Yates shuffle. Walks from the last index down to 1 and swaps each
/// element with one chosen uniformly at or before it.
pub fn shuffle_in_place<T, R: Randomness + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.pick_index(i + 1);
        items.swap(i, j);
    }
}

/// Shuffle an owned copy, leaving the caller's slice untouched.
pub fn shuffled<T: Clone, R: Randomness + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_util::{AlwaysFirst, AlwaysLast};

    #[test]
    fn test_always_last_is_identity() {
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle_in_place(&mut items, &mut AlwaysLast);
        assert_eq!(vec![1, 2, 3, 4, 5], items);
    }

    #[test]
    fn test_always_first_rotates() {
        // i=3 swaps with 0: [d,b,c,a]; i=2: [c,b,d,a]; i=1: [b,c,d,a]
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle_in_place(&mut items, &mut AlwaysFirst);
        assert_eq!(vec!['b', 'c', 'd', 'a'], items);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u8> = vec![];
        shuffle_in_place(&mut empty, &mut AlwaysFirst);
        assert!(empty.is_empty());

        let mut one = vec![9];
        shuffle_in_place(&mut one, &mut AlwaysFirst);
        assert_eq!(vec![9], one);
    }

    #[test]
    fn test_shuffled_leaves_source_alone() {
        let source = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let mut rng = StdRng::seed_from_u64(42);
        let mut out = shuffled(&source, &mut rng);
        assert_eq!(vec![1, 2, 3, 4, 5, 6, 7, 8], source);
        out.sort();
        assert_eq!(source, out);
    }

    #[test]
    fn test_permutations_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        let trials = 60_000;
        for _ in 0..trials {
            let out = shuffled(&[0u8, 1, 2], &mut rng);
            *counts.entry(out).or_default() += 1;
        }

        assert_eq!(6, counts.len());
        let expected = trials / 6;
        for (perm, count) in counts {
            assert!(
                count > expected * 9 / 10 && count < expected * 11 / 10,
                "Permutation {:?} seen {} times, expected about {}",
                perm,
                count,
                expected
            );
        }
    }
}
