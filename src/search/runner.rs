use crate::consts::{index_letter, ALPHABET_LEN, MIN_SCORABLE_LEN};
use crate::error::{BombeError, BombeResult};
use crate::machine::{Machine, MachineConfig, Plugboard, RotorId};
use crate::scorer::TrigramModel;
use crate::search::{climb, pick_better, CancelToken, Candidate, SearchState};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// The enumerable key space: every ordered pair of distinct pool rotors in
/// the two fast slots, crossed with every pair of start positions drawn
/// from the slot windows. The remaining slots, all rings, and the
/// reflector stay frozen in the base configuration.
#[derive(Debug, Clone)]
pub struct KeySpace {
    pub base: MachineConfig,
    pub pool: Vec<RotorId>,
    pub first_window: Vec<u8>,
    pub second_window: Vec<u8>,
}

/// Outcome of a full (or cancelled-but-productive) key-space run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: Candidate,
    pub plaintext: Vec<u8>,
    pub evaluated: usize,
}

impl KeySpace {
    pub fn new(base: MachineConfig, pool: Vec<RotorId>) -> Self {
        let full: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
        Self {
            base,
            pool,
            first_window: full.clone(),
            second_window: full,
        }
    }

    /// Narrow the start-position windows of the two searched slots.
    pub fn with_windows(mut self, first: Vec<u8>, second: Vec<u8>) -> Self {
        self.first_window = first;
        self.second_window = second;
        self
    }

    pub fn candidate_count(&self) -> usize {
        self.rotor_pairs().len() * self.first_window.len() * self.second_window.len()
    }

    fn rotor_pairs(&self) -> Vec<(RotorId, RotorId)> {
        let mut pairs = Vec::new();
        for &r0 in &self.pool {
            for &r1 in &self.pool {
                if r0 != r1 {
                    pairs.push((r0, r1));
                }
            }
        }
        pairs
    }

    fn validate(&self, ciphertext: &[u8]) -> BombeResult<()> {
        if ciphertext.len() < MIN_SCORABLE_LEN {
            return Err(BombeError::DegenerateInput {
                len: ciphertext.len(),
                min: MIN_SCORABLE_LEN,
            });
        }
        if self.pool.len() < 2 {
            return Err(BombeError::Config(
                "rotor pool needs at least two distinct entries".to_string(),
            ));
        }
        for (n, rotor) in self.pool.iter().enumerate() {
            if self.pool[..n].contains(rotor) {
                return Err(BombeError::Config(format!(
                    "rotor {} appears twice in the pool",
                    rotor
                )));
            }
        }
        for (n, window) in [&self.first_window, &self.second_window].iter().enumerate() {
            if window.is_empty() {
                return Err(BombeError::Config(format!(
                    "position window {} is empty",
                    n
                )));
            }
            if let Some(&bad) = window.iter().find(|&&p| p as usize >= ALPHABET_LEN) {
                return Err(BombeError::Config(format!(
                    "position window {} holds {} which is outside the alphabet",
                    n, bad
                )));
            }
        }
        // Reject a broken base once, up front, instead of per candidate.
        Machine::from_config(&self.base)?;
        Ok(())
    }

    /// Exhaust the key space and return the best configuration by trigram
    /// log-likelihood, with the ciphertext decoded under it.
    ///
    /// Position combinations within one rotor ordering run in parallel;
    /// the reduction is deterministic (ties keep the earliest enumeration
    /// index), so the result matches a sequential scan exactly. The token
    /// is checked between candidate evaluations: cancelling mid-run yields
    /// the best seen so far, cancelling before any completes is an error.
    pub fn run(
        &self,
        ciphertext: &[u8],
        model: &TrigramModel,
        cancel: &CancelToken,
    ) -> BombeResult<SearchResult> {
        self.validate(ciphertext)?;

        let pairs = self.rotor_pairs();
        let per_pair = self.first_window.len() * self.second_window.len();
        let evaluated = AtomicUsize::new(0);
        let mut state = SearchState::default();

        for (pair_no, &(r0, r1)) in pairs.iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }
            info!("trying rotor order {} {} ({}/{})", r0, r1, pair_no + 1, pairs.len());

            let mut combos = Vec::with_capacity(per_pair);
            for (a_no, &a) in self.first_window.iter().enumerate() {
                for (b_no, &b) in self.second_window.iter().enumerate() {
                    let index =
                        pair_no * per_pair + a_no * self.second_window.len() + b_no;
                    combos.push((index, a, b));
                }
            }

            let block = combos
                .par_iter()
                .map(|&(index, a, b)| -> BombeResult<Option<(usize, Candidate)>> {
                    if cancel.is_cancelled() {
                        return Ok(None);
                    }
                    let candidate = self.evaluate(r0, r1, a, b, ciphertext, model)?;
                    evaluated.fetch_add(1, Ordering::Relaxed);
                    Ok(Some((index, candidate)))
                })
                .try_reduce(
                    || None,
                    |x, y| {
                        Ok(match (x, y) {
                            (Some(a), Some(b)) => Some(pick_better(a, b)),
                            (a, None) => a,
                            (None, b) => b,
                        })
                    },
                )?;

            if let Some((index, candidate)) = block {
                state.consider(index, candidate);
            }
            if let Some(best) = state.best() {
                debug!(
                    "best so far: {} {} at {}{}, score {:.3}",
                    best.config.slots[0].rotor,
                    best.config.slots[1].rotor,
                    index_letter(best.config.slots[0].start) as char,
                    index_letter(best.config.slots[1].start) as char,
                    best.slow
                );
            }
        }

        let best = state.into_best().ok_or(BombeError::Cancelled)?;
        let machine = Machine::from_config(&best.config)?;
        let plaintext = machine.decode(ciphertext);
        Ok(SearchResult {
            best,
            plaintext,
            evaluated: evaluated.into_inner(),
        })
    }

    /// One candidate: climb a plugboard under the fast statistic, then pay
    /// for a single slow scoring of the finished decode.
    fn evaluate(
        &self,
        r0: RotorId,
        r1: RotorId,
        a: u8,
        b: u8,
        ciphertext: &[u8],
        model: &TrigramModel,
    ) -> BombeResult<Candidate> {
        let mut config = self.base.clone();
        config.slots[0].rotor = r0;
        config.slots[1].rotor = r1;
        config.slots[0].start = a;
        config.slots[1].start = b;
        config.plugboard = Plugboard::identity();

        let mut machine = Machine::from_config(&config)?;
        let (plugboard, fast) = climb(&mut machine, ciphertext);
        config.plugboard = plugboard;
        machine.set_plugboard(plugboard);
        let slow = model.log_likelihood(&machine.decode(ciphertext));

        Ok(Candidate { config, fast, slow })
    }
}
