use std::collections::HashSet;

/// First character, in scan order, that already appeared earlier in `s`.
pub fn first_recurring(s: &str) -> Option<char> {
    let mut seen = HashSet::new();
    s.chars().find(|&c| !seen.insert(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_earliest_repeat() {
        assert_eq!(first_recurring("DBCABA"), Some('B'));
        assert_eq!(first_recurring("ABBA"), Some('B'));
    }

    #[test]
    fn none_without_repeats() {
        assert_eq!(first_recurring("ABCD"), None);
        assert_eq!(first_recurring(""), None);
    }
}
