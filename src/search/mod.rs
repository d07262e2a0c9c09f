pub mod climber;
pub mod runner;

pub use self::climber::climb;
pub use self::runner::{KeySpace, SearchResult};

use crate::machine::MachineConfig;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Externally triggered stop signal, checked between candidate evaluations.
/// The full key space runs to tens of millions of simulator calls; callers
/// need a way out that still yields the best configuration seen so far.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One fully evaluated key-space candidate. Never mutated after creation,
/// only compared.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub config: MachineConfig,
    /// Index of coincidence of the decode under the climbed plugboard.
    pub fast: f64,
    /// Trigram log-likelihood of the same decode.
    pub slow: f64,
}

/// Process-local best-so-far tracker. Replacement is strictly better-than
/// on the slow score; equal scores keep the earlier enumeration index, so
/// the first candidate found wins ties no matter how the space was split
/// across workers.
#[derive(Debug, Default)]
pub struct SearchState {
    best: Option<(usize, Candidate)>,
}

impl SearchState {
    pub fn consider(&mut self, index: usize, candidate: Candidate) {
        let challenger = (index, candidate);
        match self.best.take() {
            Some(incumbent) => {
                self.best = Some(pick_better(incumbent, challenger));
            }
            None => self.best = Some(challenger),
        }
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref().map(|(_, c)| c)
    }

    pub fn into_best(self) -> Option<Candidate> {
        self.best.map(|(_, c)| c)
    }
}

/// Keep the higher slow score; on an exact tie, the lower enumeration
/// index. Commutative and associative, so parallel reduction is
/// bit-identical to the sequential scan.
pub(crate) fn pick_better(
    a: (usize, Candidate),
    b: (usize, Candidate),
) -> (usize, Candidate) {
    if b.1.slow > a.1.slow || (b.1.slow == a.1.slow && b.0 < a.0) {
        b
    } else {
        a
    }
}
