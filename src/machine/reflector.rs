use strum_macros::{Display, EnumIter, EnumString};

/// Historical reflector identities. The thin variants pair with a Beta or
/// Gamma wheel in the fourth slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ReflectorId {
    A,
    B,
    C,
    #[strum(serialize = "B-thin")]
    BThin,
    #[strum(serialize = "C-thin")]
    CThin,
}

impl ReflectorId {
    pub(crate) fn wiring(self) -> &'static [u8; 26] {
        match self {
            Self::A => b"EJMZALYXVBWFCRQUONTSPIKHGD",
            Self::B => b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
            Self::BThin => b"ENKQAUYWJICOPBLMDXZVFTHRGS",
            Self::CThin => b"RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }
}
