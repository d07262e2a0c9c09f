use bombe::config::SearchParams;
use bombe::error::BombeError;
use bombe::machine::{Machine, MachineConfig, Plugboard, RotorId};
use bombe::scorer::{index_of_coincidence, TrigramModel};
use bombe::search::{climb, CancelToken, KeySpace};
use std::collections::HashMap;

fn base_config() -> MachineConfig {
    SearchParams::default().base_config().unwrap()
}

/// The true key used by the recovery scenarios: rotors II and V in the
/// searched slots at C and M, plugboard A-Z B-Y, everything else at the
/// run defaults.
fn true_config() -> MachineConfig {
    let mut config = base_config();
    config.slots[0].rotor = RotorId::II;
    config.slots[1].rotor = RotorId::V;
    config.slots[0].start = 2; // C
    config.slots[1].start = 12; // M
    config.with_plugboard(Plugboard::from_pairs(&[(0, 25), (1, 24)]).unwrap())
}

/// A language model where the plaintext's trigrams are common and every
/// other sequence is rare but still present, the way a full corpus covers
/// the whole trigram space. Garbled decodes then score far below the
/// genuine one instead of getting their unseen windows for free.
fn covering_model(plaintext: &[u8]) -> TrigramModel {
    let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
    for a in b'A'..=b'Z' {
        for b in b'A'..=b'Z' {
            for c in b'A'..=b'Z' {
                counts.insert([a, b, c], 1);
            }
        }
    }
    for w in plaintext.windows(3) {
        counts.insert([w[0], w[1], w[2]], 5000);
    }
    TrigramModel::from_counts(counts).unwrap()
}

#[test]
fn test_end_to_end_key_recovery() {
    let plaintext = b"ATTACKATDAWN".repeat(30);
    let truth = true_config();
    let ciphertext = Machine::from_config(&truth).unwrap().decode(&plaintext);
    let model = covering_model(&plaintext);

    // Correct pool, position windows around the true offsets.
    let space = KeySpace::new(base_config(), vec![RotorId::II, RotorId::V])
        .with_windows(vec![1, 2, 3], vec![11, 12, 13]);
    assert_eq!(space.candidate_count(), 18);

    let result = space
        .run(&ciphertext, &model, &CancelToken::new())
        .unwrap();

    assert_eq!(result.evaluated, 18);
    assert_eq!(result.plaintext, plaintext);
    let best = &result.best.config;
    assert_eq!(best.slots[0].rotor, RotorId::II);
    assert_eq!(best.slots[1].rotor, RotorId::V);
    assert_eq!((best.slots[0].start, best.slots[1].start), (2, 12));
    assert_eq!(best.plugboard.pairs(), vec![(0, 25), (1, 24)]);
}

#[test]
fn test_climber_recovers_a_single_cable() {
    let plaintext = b"ATTACKATDAWN".repeat(30);
    let mut truth = true_config();
    truth.plugboard = Plugboard::from_pairs(&[(0, 25)]).unwrap();
    let ciphertext = Machine::from_config(&truth).unwrap().decode(&plaintext);

    let bare = truth.clone().with_plugboard(Plugboard::identity());
    let mut machine = Machine::from_config(&bare).unwrap();
    let (board, score) = climb(&mut machine, &ciphertext);

    assert_eq!(board.pairs(), vec![(0, 25)]);
    machine.set_plugboard(board);
    assert_eq!(machine.decode(&ciphertext), plaintext);
    assert!((score - index_of_coincidence(&plaintext)).abs() < 1e-12);
}

#[test]
fn test_equal_scores_keep_the_first_candidate() {
    // An empty model scores every decode 0, so the whole space ties and
    // the strict greater-than comparison must keep enumeration order.
    let model = TrigramModel::default();
    let ciphertext = b"QWERTYUIOPASDFGHJKLZXCVBNM".to_vec();
    let space = KeySpace::new(base_config(), vec![RotorId::I, RotorId::II])
        .with_windows(vec![0], vec![0]);

    let result = space
        .run(&ciphertext, &model, &CancelToken::new())
        .unwrap();

    assert_eq!(result.best.slow, 0.0);
    assert_eq!(result.best.config.slots[0].rotor, RotorId::I);
    assert_eq!(result.best.config.slots[1].rotor, RotorId::II);
}

#[test]
fn test_degenerate_ciphertext_is_rejected_up_front() {
    let model = TrigramModel::default();
    let space = KeySpace::new(base_config(), vec![RotorId::I, RotorId::II]);
    let err = space
        .run(b"AB", &model, &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, BombeError::DegenerateInput { len: 2, min: 3 }));
}

#[test]
fn test_cancelled_before_any_candidate() {
    let model = TrigramModel::default();
    let space = KeySpace::new(base_config(), vec![RotorId::I, RotorId::II]);
    let token = CancelToken::new();
    token.cancel();
    let err = space
        .run(b"QWERTYUIOP", &model, &token)
        .unwrap_err();
    assert!(matches!(err, BombeError::Cancelled));
}

#[test]
fn test_single_rotor_pool_is_rejected() {
    let model = TrigramModel::default();
    let space = KeySpace::new(base_config(), vec![RotorId::I]);
    let err = space
        .run(b"QWERTYUIOP", &model, &CancelToken::new())
        .unwrap_err();
    assert!(matches!(err, BombeError::Config(_)));
}

#[test]
fn test_full_space_dimensions() {
    let space = KeySpace::new(base_config(), SearchParams::default().pool);
    // 6 pool rotors in ordered distinct pairs, 26 x 26 start positions.
    assert_eq!(space.candidate_count(), 30 * 26 * 26);
}
