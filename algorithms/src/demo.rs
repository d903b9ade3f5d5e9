//! Reproducible key sequences for replay sessions.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// `"k0" .. "k{nkeys-1}"` shuffled by a generator seeded with `seed`.
pub fn demo_keys(nkeys: usize, seed: u64) -> Vec<String> {
    let mut keys: Vec<String> = (0..nkeys).map(|i| format!("k{i}")).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    keys.shuffle(&mut rng);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        assert_eq!(demo_keys(18, 42), demo_keys(18, 42));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut keys = demo_keys(10, 7);
        keys.sort_by_key(|k| k[1..].parse::<usize>().unwrap());
        let expected: Vec<String> = (0..10).map(|i| format!("k{i}")).collect();
        assert_eq!(keys, expected);
    }
}
