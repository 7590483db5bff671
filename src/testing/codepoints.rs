use rand::{Rng, seq::IndexedRandom};

pub const LATIN_ALPHABETS_LOWER: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// `size` random printable code points above space, outside the surrogate
/// range. Duplicates are possible.
pub fn generate_code_point_set(size: usize, rng: &mut impl Rng) -> Vec<char> {
    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let candidate = rng.random_range(0x21..=char::MAX as u32);
        // Rejects surrogates.
        if let Some(c) = char::from_u32(candidate) {
            out.push(c);
        }
    }
    out
}

/// A word of `len` code points drawn from `alphabet`.
pub fn generate_word(alphabet: &[char], len: usize, rng: &mut impl Rng) -> String {
    (0..len).filter_map(|_| alphabet.choose(rng).copied()).collect()
}

/// Space-separated sentence of lowercase Latin words, each 1 to 12 letters.
pub fn generate_sentence(words: usize, rng: &mut impl Rng) -> String {
    let mut out = String::new();
    for i in 0..words {
        if i > 0 {
            out.push(' ');
        }
        let len = rng.random_range(1..=12);
        out.push_str(&generate_word(&LATIN_ALPHABETS_LOWER, len, rng));
    }
    out
}
