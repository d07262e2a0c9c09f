pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use self::plugboard::Plugboard;
pub use self::reflector::ReflectorId;
pub use self::rotor::{RotorId, RotorSlot};

use crate::consts::ALPHABET_LEN;
use crate::error::{BombeError, BombeResult};

/// A complete machine key: rotor slots leftmost first, the reflector, and
/// the plugboard. Built fresh per search candidate and passed by value;
/// nothing here is shared mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineConfig {
    pub slots: Vec<RotorSlot>,
    pub reflector: ReflectorId,
    pub plugboard: Plugboard,
}

impl MachineConfig {
    pub fn new(slots: Vec<RotorSlot>, reflector: ReflectorId) -> Self {
        Self {
            slots,
            reflector,
            plugboard: Plugboard::identity(),
        }
    }

    pub fn with_plugboard(mut self, plugboard: Plugboard) -> Self {
        self.plugboard = plugboard;
        self
    }

    /// Surface configuration mistakes here, before the simulator ever runs.
    pub fn validate(&self) -> BombeResult<()> {
        if self.slots.len() < 3 {
            return Err(BombeError::Config(format!(
                "a machine needs at least 3 rotor slots, got {}",
                self.slots.len()
            )));
        }
        for (n, slot) in self.slots.iter().enumerate() {
            if !(1..=26).contains(&slot.ring) {
                return Err(BombeError::Config(format!(
                    "slot {}: ring setting {} outside 1-26",
                    n, slot.ring
                )));
            }
            if slot.start as usize >= ALPHABET_LEN {
                return Err(BombeError::Config(format!(
                    "slot {}: start position {} outside the alphabet",
                    n, slot.start
                )));
            }
        }
        Ok(())
    }
}

struct Mounted {
    forward: [u8; 26],
    reverse: [u8; 26],
    notches: &'static [u8],
    ring: u8, // 0-based
    start: u8,
}

impl Mounted {
    fn new(slot: &RotorSlot) -> Self {
        let mut forward = [0u8; 26];
        let mut reverse = [0u8; 26];
        for (i, &b) in slot.rotor.wiring().iter().enumerate() {
            let out = b - b'A';
            forward[i] = out;
            reverse[out as usize] = i as u8;
        }
        Self {
            forward,
            reverse,
            notches: slot.rotor.notches(),
            ring: slot.ring - 1,
            start: slot.start,
        }
    }

    fn at_notch(&self, offset: u8) -> bool {
        self.notches.contains(&offset)
    }

    fn shift(&self, offset: u8) -> usize {
        (ALPHABET_LEN + offset as usize - self.ring as usize) % ALPHABET_LEN
    }

    fn forward(&self, c: u8, offset: u8) -> u8 {
        let shift = self.shift(offset);
        let entry = (c as usize + shift) % ALPHABET_LEN;
        ((self.forward[entry] as usize + ALPHABET_LEN - shift) % ALPHABET_LEN) as u8
    }

    fn backward(&self, c: u8, offset: u8) -> u8 {
        let shift = self.shift(offset);
        let entry = (c as usize + shift) % ALPHABET_LEN;
        ((self.reverse[entry] as usize + ALPHABET_LEN - shift) % ALPHABET_LEN) as u8
    }
}

/// The cipher simulator. Deterministic, length-preserving, and reciprocal:
/// decoding a decode with the same configuration reproduces the input.
/// Rotor stepping happens on a per-call copy of the offsets, so `decode`
/// takes `&self` and the machine can be reused freely.
pub struct Machine {
    mounted: Vec<Mounted>,
    reflector: [u8; 26],
    plugboard: Plugboard,
}

impl Machine {
    pub fn from_config(config: &MachineConfig) -> BombeResult<Self> {
        config.validate()?;
        let mut reflector = [0u8; 26];
        for (i, &b) in config.reflector.wiring().iter().enumerate() {
            reflector[i] = b - b'A';
        }
        Ok(Self {
            mounted: config.slots.iter().map(Mounted::new).collect(),
            reflector,
            plugboard: config.plugboard,
        })
    }

    /// Swap in a different plugboard without rebuilding the rotor stack.
    /// The hill-climber re-wires hundreds of boards per rotor setting.
    pub fn set_plugboard(&mut self, plugboard: Plugboard) {
        self.plugboard = plugboard;
    }

    /// Decode (equivalently, encode) uppercase ASCII text.
    pub fn decode(&self, text: &[u8]) -> Vec<u8> {
        let mut offsets: Vec<u8> = self.mounted.iter().map(|m| m.start).collect();
        let mut out = Vec::with_capacity(text.len());
        for &b in text {
            debug_assert!(
                b.is_ascii_uppercase(),
                "non-alphabetic symbol reached the simulator"
            );
            self.step(&mut offsets);
            let mut x = self.plugboard.partner(b - b'A');
            for k in (0..self.mounted.len()).rev() {
                x = self.mounted[k].forward(x, offsets[k]);
            }
            x = self.reflector[x as usize];
            for k in 0..self.mounted.len() {
                x = self.mounted[k].backward(x, offsets[k]);
            }
            x = self.plugboard.partner(x);
            out.push(b'A' + x);
        }
        out
    }

    /// Odometer stepping with the double-step anomaly. Only the three
    /// rightmost wheels ever move; a fourth (leftmost) wheel is static.
    fn step(&self, offsets: &mut [u8]) {
        let n = offsets.len();
        let (third, mid, right) = (n - 3, n - 2, n - 1);
        if self.mounted[mid].at_notch(offsets[mid]) {
            offsets[third] = (offsets[third] + 1) % ALPHABET_LEN as u8;
            offsets[mid] = (offsets[mid] + 1) % ALPHABET_LEN as u8;
        } else if self.mounted[right].at_notch(offsets[right]) {
            offsets[mid] = (offsets[mid] + 1) % ALPHABET_LEN as u8;
        }
        offsets[right] = (offsets[right] + 1) % ALPHABET_LEN as u8;
    }
}
