use bombe::error::BombeError;
use bombe::machine::Plugboard;

#[test]
fn test_expand_leaves_unmentioned_letters_alone() {
    let board = Plugboard::from_pairs(&[(0, 25), (1, 24)]).unwrap();
    assert_eq!(board.partner(0), 25);
    assert_eq!(board.partner(25), 0);
    assert_eq!(board.partner(1), 24);
    assert_eq!(board.partner(24), 1);
    for i in 2..24 {
        assert_eq!(board.partner(i), i);
    }
}

#[test]
fn test_pair_list_round_trip() {
    let pairs = vec![(0, 25), (1, 24), (4, 17), (7, 8)];
    let board = Plugboard::from_pairs(&pairs).unwrap();
    assert_eq!(board.pairs(), pairs);
    // Reversed pair order and flipped endpoints describe the same board.
    let same = Plugboard::from_pairs(&[(8, 7), (17, 4), (24, 1), (25, 0)]).unwrap();
    assert_eq!(same, board);
}

#[test]
fn test_each_letter_reported_once() {
    let board = Plugboard::from_pairs(&[(2, 3)]).unwrap();
    let pairs = board.pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(board.pair_count(), 1);
}

#[test]
fn test_letter_in_two_pairs_rejected() {
    let err = Plugboard::from_pairs(&[(0, 1), (1, 2)]).unwrap_err();
    assert!(matches!(err, BombeError::Config(_)));
}

#[test]
fn test_self_pair_rejected() {
    let err = Plugboard::from_pairs(&[(5, 5)]).unwrap_err();
    assert!(matches!(err, BombeError::Config(_)));
}

#[test]
fn test_out_of_alphabet_rejected() {
    let err = Plugboard::from_pairs(&[(0, 26)]).unwrap_err();
    assert!(matches!(err, BombeError::Config(_)));
}

#[test]
fn test_full_board_of_thirteen_pairs() {
    let pairs: Vec<(u8, u8)> = (0..13).map(|i| (i, 25 - i)).collect();
    let board = Plugboard::from_pairs(&pairs).unwrap();
    assert_eq!(board.pair_count(), 13);
    assert!(!board.is_identity());
}

#[test]
fn test_swap_exchanges_only_the_named_wirings() {
    let board = Plugboard::from_pairs(&[(0, 25), (4, 17)]).unwrap();
    let rewired = board.with_pair(0, 4);
    // A and E are now partners; their old partners fall back to identity.
    assert_eq!(rewired.partner(0), 4);
    assert_eq!(rewired.partner(4), 0);
    assert_eq!(rewired.partner(25), 25);
    assert_eq!(rewired.partner(17), 17);
    // The original board is untouched.
    assert_eq!(board.partner(0), 25);
}

#[test]
fn test_display_formats_space_separated_pairs() {
    let board = Plugboard::from_pairs(&[(0, 25), (1, 24)]).unwrap();
    assert_eq!(board.to_string(), "AZ BY");
    assert_eq!(Plugboard::identity().to_string(), "");
}
