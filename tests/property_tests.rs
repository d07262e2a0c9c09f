use bombe::machine::{Machine, MachineConfig, Plugboard, ReflectorId, RotorId, RotorSlot};
use bombe::scorer::index_of_coincidence;
use proptest::prelude::*;
use strum::IntoEnumIterator;

// --- STRATEGIES ---

fn arb_rotor() -> impl Strategy<Value = RotorId> {
    proptest::sample::select(RotorId::iter().collect::<Vec<_>>())
}

fn arb_reflector() -> impl Strategy<Value = ReflectorId> {
    proptest::sample::select(ReflectorId::iter().collect::<Vec<_>>())
}

prop_compose! {
    fn arb_slot()(rotor in arb_rotor(), ring in 1u8..=26, start in 0u8..26) -> RotorSlot {
        RotorSlot::new(rotor, ring, start)
    }
}

/// Disjoint letter pairs: an even-length sorted subsequence of the
/// alphabet, chunked in twos.
fn arb_pairs() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::sample::subsequence((0u8..26).collect::<Vec<_>>(), 0..=26).prop_map(
        |mut letters| {
            if letters.len() % 2 == 1 {
                letters.pop();
            }
            letters.chunks(2).map(|c| (c[0], c[1])).collect()
        },
    )
}

prop_compose! {
    fn arb_config()(
        slots in proptest::collection::vec(arb_slot(), 3..=4),
        reflector in arb_reflector(),
        pairs in arb_pairs()
    ) -> MachineConfig {
        MachineConfig::new(slots, reflector)
            .with_plugboard(Plugboard::from_pairs(&pairs).unwrap())
    }
}

fn arb_text() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..26, 0..200)
        .prop_map(|v| v.into_iter().map(|i| b'A' + i).collect())
}

// --- PROPERTIES ---

proptest! {
    #[test]
    fn decode_is_reciprocal(config in arb_config(), text in arb_text()) {
        let machine = Machine::from_config(&config).unwrap();
        prop_assert_eq!(machine.decode(&machine.decode(&text)), text);
    }

    #[test]
    fn decode_preserves_length_and_never_fixes_a_letter(
        config in arb_config(),
        text in arb_text()
    ) {
        let machine = Machine::from_config(&config).unwrap();
        let out = machine.decode(&text);
        prop_assert_eq!(out.len(), text.len());
        for (&a, &b) in text.iter().zip(out.iter()) {
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn plugboard_pair_list_round_trips(pairs in arb_pairs()) {
        let board = Plugboard::from_pairs(&pairs).unwrap();
        prop_assert_eq!(board.pairs(), pairs);
    }

    #[test]
    fn ioc_depends_only_on_the_letter_multiset(text in arb_text()) {
        prop_assume!(text.len() >= 2);
        let mut sorted = text.clone();
        sorted.sort_unstable();
        let mut reversed = text.clone();
        reversed.reverse();
        let reference = index_of_coincidence(&text);
        prop_assert_eq!(reference, index_of_coincidence(&sorted));
        prop_assert_eq!(reference, index_of_coincidence(&reversed));
    }
}
