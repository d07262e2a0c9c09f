use crate::consts::ALPHABET_LEN;
use crate::machine::{Machine, Plugboard};
use crate::scorer::index_of_coincidence;

/// Greedy plugboard search for one fixed rotor setting: a single
/// left-to-right sweep over all letter-index pairs, maximizing the index
/// of coincidence of the decode. Deliberately not an
/// iterate-to-convergence climb: one pass, then return whatever wiring
/// was globally best at sweep end. Multi-sweep variants find different
/// boards and are out of scope.
///
/// Returns the winning board and its score.
pub fn climb(machine: &mut Machine, ciphertext: &[u8]) -> (Plugboard, f64) {
    let n = ALPHABET_LEN as u8;
    let mut best = Plugboard::identity();
    let mut best_score = f64::NEG_INFINITY;

    for i in 0..n {
        // The row baseline is the best wiring from all previous rows; it
        // stays fixed while this row's steps are explored.
        let row = best;
        for j in (i + 1)..n {
            let (wiring, score) = if row.partner(j) != j {
                rewire_step(machine, ciphertext, &row, i, j)
            } else {
                let candidate = row.with_pair(i, j);
                let score = score_wiring(machine, ciphertext, candidate);
                (candidate, score)
            };
            if score > best_score {
                best_score = score;
                best = wiring;
            }
        }
    }

    (best, best_score)
}

/// Position `j` is already cabled away from identity: try the four ways of
/// keeping or breaking `i`'s and `j`'s current pairs, and adopt the best.
/// Four decodes, four scorings; first-highest wins on ties.
fn rewire_step(
    machine: &mut Machine,
    ciphertext: &[u8],
    row: &Plugboard,
    i: u8,
    j: u8,
) -> (Plugboard, f64) {
    let candidates = [
        *row,                                       // keep-keep
        row.with_unplugged(i),                      // break-i
        row.with_unplugged(j),                      // break-j
        row.with_unplugged(i).with_unplugged(j),    // break-both
    ];
    let mut step = candidates[0];
    let mut step_score = score_wiring(machine, ciphertext, step);
    for &candidate in &candidates[1..] {
        let score = score_wiring(machine, ciphertext, candidate);
        if score > step_score {
            step_score = score;
            step = candidate;
        }
    }
    (step, step_score)
}

fn score_wiring(machine: &mut Machine, ciphertext: &[u8], wiring: Plugboard) -> f64 {
    machine.set_plugboard(wiring);
    index_of_coincidence(&machine.decode(ciphertext))
}
