//! Word-prefix matching used to filter categories while typing.
//!
//! A candidate such as `"Cats (indoor)_2019"` is split into words on spaces, underscores and
//! parentheses; dots, quotes and dashes are dropped entirely. The candidate matches when any
//! of its words starts with the query, ignoring case. An empty query matches everything.

const SEPARATORS: [char; 4] = [' ', '_', '(', ')'];
const IGNORED: [char; 4] = ['.', '\'', '"', '-'];

pub fn split_words(candidate: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in candidate.chars() {
        if SEPARATORS.contains(&c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if !IGNORED.contains(&c) {
            current.push(c);
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

pub fn matches(query: &str, candidate: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    split_words(candidate)
        .iter()
        .any(|word| word.to_lowercase().starts_with(&query))
}
