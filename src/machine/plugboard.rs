use crate::consts::{index_letter, ALPHABET_LEN};
use crate::error::{BombeError, BombeResult};
use std::fmt;

/// Plugboard wiring as a fixed involution table: `wiring[i]` is the letter
/// index letter `i` is cabled to, or `i` itself when unplugged. The table
/// form replaces the flat-string-with-placeholder representation wholesale;
/// there is no scratch character anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [u8; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// The empty board: every letter maps to itself.
    pub fn identity() -> Self {
        let mut wiring = [0u8; 26];
        for (i, w) in wiring.iter_mut().enumerate() {
            *w = i as u8;
        }
        Self { wiring }
    }

    /// Expand a compact pair list into the full table. Rejects a letter
    /// appearing in more than one pair, or paired with itself.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> BombeResult<Self> {
        let mut board = Self::identity();
        let mut used = [false; 26];
        for &(a, b) in pairs {
            if a as usize >= ALPHABET_LEN || b as usize >= ALPHABET_LEN {
                return Err(BombeError::Config(format!(
                    "plugboard pair ({}, {}) is outside the alphabet",
                    a, b
                )));
            }
            if a == b {
                return Err(BombeError::Config(format!(
                    "letter {} cannot be plugged to itself",
                    index_letter(a) as char
                )));
            }
            if used[a as usize] || used[b as usize] {
                let dup = if used[a as usize] { a } else { b };
                return Err(BombeError::Config(format!(
                    "letter {} appears in more than one plugboard pair",
                    index_letter(dup) as char
                )));
            }
            used[a as usize] = true;
            used[b as usize] = true;
            board.wiring[a as usize] = b;
            board.wiring[b as usize] = a;
        }
        Ok(board)
    }

    /// The letter index `i` is wired to (itself when unplugged).
    pub fn partner(&self, i: u8) -> u8 {
        self.wiring[i as usize]
    }

    /// Compact pair list, each letter reported at most once, ordered by the
    /// lower letter of each pair.
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        let mut out = Vec::new();
        for i in 0..ALPHABET_LEN as u8 {
            let p = self.wiring[i as usize];
            if p > i {
                out.push((i, p));
            }
        }
        out
    }

    pub fn pair_count(&self) -> usize {
        self.wiring
            .iter()
            .enumerate()
            .filter(|&(i, &p)| (p as usize) > i)
            .count()
    }

    pub fn is_identity(&self) -> bool {
        self.wiring.iter().enumerate().all(|(i, &p)| p as usize == i)
    }

    /// New board with `a` and `b` cabled together. Any cable previously
    /// attached to either letter is removed first, so the result is always
    /// a valid involution; all other pairs are untouched.
    pub fn with_pair(&self, a: u8, b: u8) -> Self {
        debug_assert!(a != b);
        let mut next = self.with_unplugged(a);
        next = next.with_unplugged(b);
        next.wiring[a as usize] = b;
        next.wiring[b as usize] = a;
        next
    }

    /// New board with any cable touching `a` removed (no-op when unplugged).
    pub fn with_unplugged(&self, a: u8) -> Self {
        let mut next = *self;
        let p = next.wiring[a as usize];
        next.wiring[p as usize] = p;
        next.wiring[a as usize] = a;
        next
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (a, b)) in self.pairs().into_iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", index_letter(a) as char, index_letter(b) as char)?;
        }
        Ok(())
    }
}
