use std::hash::BuildHasherDefault;

use itertools::Itertools;

pub type IndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<ahash::AHasher>>;
pub type IndexSet<V> = indexmap::IndexSet<V, BuildHasherDefault<ahash::AHasher>>;

pub trait Config: Sized {
    fn config(mut self, f: impl FnOnce(&mut Self)) -> Self {
        f(&mut self);
        self
    }
}

impl<T> Config for T {}

/// Trim trailing spaces and tabs, leaving trailing newlines in place.
pub fn trim_spaces_end(s: &str) -> &str {
    s.trim_end_matches([' ', '\t'])
}

pub fn truncate_spaces_end(s: &mut String) {
    let len = trim_spaces_end(s).len();
    s.truncate(len);
}

/// Collapse every internal whitespace run to a single space, so multi-word
/// keywords render as `LEFT JOIN` regardless of source spacing.
pub fn equalize_whitespace(s: &str) -> String {
    s.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_spaces_end_keeps_newlines() {
        assert_eq!(trim_spaces_end("a \t "), "a");
        assert_eq!(trim_spaces_end("a\n  "), "a\n");
        assert_eq!(trim_spaces_end(""), "");
    }

    #[test]
    fn equalize_whitespace_collapses_runs() {
        assert_eq!(equalize_whitespace("LEFT \t  JOIN"), "LEFT JOIN");
        assert_eq!(equalize_whitespace("ORDER\nBY"), "ORDER BY");
    }
}
