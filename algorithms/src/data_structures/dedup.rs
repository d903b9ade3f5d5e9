//! Order-preserving deduplication.
//!
//! Variables:
//!   seen : HashSet<&T>  — values already emitted
//!
//! Equations:
//!   out = [x_i | x_i ∉ {x_0 .. x_{i-1}}]     O(n) expected

use std::collections::HashSet;
use std::hash::Hash;

pub fn dedup<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        assert_eq!(dedup(&[3, 1, 2, 1, 3, 4]), vec![3, 1, 2, 4]);
    }

    #[test]
    fn empty_and_unique_inputs_pass_through() {
        assert!(dedup::<u8>(&[]).is_empty());
        assert_eq!(dedup(&["x", "y"]), vec!["x", "y"]);
    }
}
