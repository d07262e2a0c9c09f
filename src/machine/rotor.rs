use strum_macros::{Display, EnumIter, EnumString};

/// Historical rotor identities. I-VIII are the stepping wheels; Beta and
/// Gamma are the thin fourth-slot wheels and carry no turnover notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
}

impl RotorId {
    /// Forward wiring, entry contact A first.
    pub(crate) fn wiring(self) -> &'static [u8; 26] {
        match self {
            Self::I => b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Self::V => b"VZBRGITYUPSDNHLXAWMJQOFECK",
            Self::VI => b"JPGVOUMFYQBENHZRDKASXLICTW",
            Self::VII => b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
            Self::VIII => b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
            Self::Beta => b"LEYJVCNIXWPBQMDRTAKZGFUHOS",
            Self::Gamma => b"FSOKANUERHMBTIYCWLQPZXVGJD",
        }
    }

    /// Window positions (letter indices) at which this rotor turns the
    /// wheel to its left on the next keypress.
    pub(crate) fn notches(self) -> &'static [u8] {
        match self {
            Self::I => &[16],       // Q
            Self::II => &[4],       // E
            Self::III => &[21],     // V
            Self::IV => &[9],       // J
            Self::V => &[25],       // Z
            Self::VI | Self::VII | Self::VIII => &[25, 12], // Z, M
            Self::Beta | Self::Gamma => &[],
        }
    }
}

/// One mounted rotor position in a machine configuration: which wheel,
/// its ring setting (1-26), and its start position (letter index 0-25).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSlot {
    pub rotor: RotorId,
    pub ring: u8,
    pub start: u8,
}

impl RotorSlot {
    pub fn new(rotor: RotorId, ring: u8, start: u8) -> Self {
        Self { rotor, ring, start }
    }
}
