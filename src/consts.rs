/// Number of letters in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A plugboard holds at most 13 disjoint cables.
pub const MAX_PLUG_PAIRS: usize = 13;

/// Shortest ciphertext the trigram statistic can score.
pub const MIN_SCORABLE_LEN: usize = 3;

/// Index (0-25) of an uppercase ASCII letter, if the byte is one.
pub fn letter_index(b: u8) -> Option<u8> {
    b.is_ascii_uppercase().then(|| b - b'A')
}

/// Uppercase ASCII letter for an alphabet index.
pub fn index_letter(i: u8) -> u8 {
    debug_assert!((i as usize) < ALPHABET_LEN);
    b'A' + i
}
