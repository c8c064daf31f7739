//! Name generation and the favorite mark.

use rand::Rng;

const NAME_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// `len` characters drawn uniformly from `A-Z0-9`.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| NAME_CHARSET[rng.gen_range(0..NAME_CHARSET.len())] as char)
        .collect()
}

/// Strips every occurrence of `mark` from `stem` if it has one, otherwise prefixes it.
pub fn toggle_mark(stem: &str, mark: &str) -> String {
    if mark.is_empty() {
        return stem.to_string();
    }
    if stem.contains(mark) {
        stem.replace(mark, "")
    } else {
        format!("{}{}", mark, stem)
    }
}

pub fn is_marked(name: &str, mark: &str) -> bool {
    !mark.is_empty() && name.contains(mark)
}
