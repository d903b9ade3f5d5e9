use std::collections::HashMap;

/// True iff `a` and `b` hold the same multiset of characters.
pub fn is_anagram(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut counts: HashMap<char, isize> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    for c in b.chars() {
        match counts.get_mut(&c) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutations_match() {
        assert!(is_anagram("listen", "silent"));
        assert!(is_anagram("", ""));
    }

    #[test]
    fn different_multisets_do_not() {
        assert!(!is_anagram("hello", "world"));
        assert!(!is_anagram("aab", "abb"));
        assert!(!is_anagram("abc", "ab"));
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert!(is_anagram("ağb", "bağ"));
        assert!(!is_anagram("é", "ab"));
    }
}
