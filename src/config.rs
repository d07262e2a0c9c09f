use crate::consts::letter_index;
use crate::error::{BombeError, BombeResult};
use crate::machine::{MachineConfig, ReflectorId, RotorId, RotorSlot};
use clap::Args;

/// Search parameters: the rotor pool for the two searched slots and the
/// frozen base machine. The defaults reproduce the standard four-slot
/// setup this attack was written against.
#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Rotor pool for the two searched slots.
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        RotorId::I, RotorId::II, RotorId::V, RotorId::VI, RotorId::Beta, RotorId::Gamma,
    ])]
    pub pool: Vec<RotorId>,

    /// Reflector, held fixed for the whole run.
    #[arg(long, default_value_t = ReflectorId::CThin)]
    pub reflector: ReflectorId,

    /// Base rotor assignment, leftmost slot first.
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        RotorId::Beta, RotorId::II, RotorId::IV, RotorId::III,
    ])]
    pub rotors: Vec<RotorId>,

    /// Ring settings per slot, 1-26.
    #[arg(long, value_delimiter = ',', default_values_t = vec![1u8, 1, 1, 16])]
    pub rings: Vec<u8>,

    /// Start positions per slot, one letter each.
    #[arg(long, default_value = "AABQ")]
    pub positions: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            pool: vec![
                RotorId::I,
                RotorId::II,
                RotorId::V,
                RotorId::VI,
                RotorId::Beta,
                RotorId::Gamma,
            ],
            reflector: ReflectorId::CThin,
            rotors: vec![RotorId::Beta, RotorId::II, RotorId::IV, RotorId::III],
            rings: vec![1, 1, 1, 16],
            positions: "AABQ".to_string(),
        }
    }
}

impl SearchParams {
    /// Assemble and validate the frozen base configuration.
    pub fn base_config(&self) -> BombeResult<MachineConfig> {
        if self.rotors.len() != self.rings.len()
            || self.rotors.len() != self.positions.chars().count()
        {
            return Err(BombeError::Config(format!(
                "mismatched slot counts: {} rotors, {} rings, {} positions",
                self.rotors.len(),
                self.rings.len(),
                self.positions.chars().count()
            )));
        }
        let mut slots = Vec::with_capacity(self.rotors.len());
        for ((&rotor, &ring), pos) in self
            .rotors
            .iter()
            .zip(self.rings.iter())
            .zip(self.positions.chars())
        {
            let start = u8::try_from(pos)
                .ok()
                .and_then(letter_index)
                .ok_or_else(|| {
                    BombeError::Config(format!("start position '{}' is not a letter A-Z", pos))
                })?;
            slots.push(RotorSlot::new(rotor, ring, start));
        }
        let config = MachineConfig::new(slots, self.reflector);
        config.validate()?;
        Ok(config)
    }
}
