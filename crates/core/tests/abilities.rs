use dicecourt_core::{
    apply_ability, fire_immediate, CardKind, EngineError, HeldCard, Player, ScriptedDice,
    Selection,
};

fn player_with(active: &[u8], fixed: &[u8]) -> Player {
    let mut player = Player::new("p1", "Tester", 3);
    player.active_dice = active.to_vec();
    player.fixed_dice = fixed.to_vec();
    player
}

fn shift(indices: &[usize], deltas: &[i8]) -> Selection {
    Selection::Shift {
        indices: indices.to_vec(),
        deltas: deltas.to_vec(),
    }
}

macro_rules! ability_case {
    ($name:ident, $card:expr, $selection:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let mut player = player_with(&[1, 2, 3, 4, 5, 6], &[3, 4]);
            let mut dice = ScriptedDice::new([2]);
            let expected: Option<Vec<u8>> = $expected;
            let result = apply_ability(&mut player, $card, &$selection, &mut dice);
            match expected {
                Some(faces) => {
                    assert_eq!(result, Ok(()));
                    assert_eq!(player.active_dice, faces);
                }
                None => {
                    assert_eq!(result, Err(EngineError::InvalidSelection));
                    assert_eq!(player.active_dice, vec![1, 2, 3, 4, 5, 6]);
                }
            }
        }
    };
}

ability_case!(
    philosopher_moves_three,
    CardKind::Philosopher,
    shift(&[0, 5], &[3, -3]),
    Some(vec![4, 2, 3, 4, 5, 3])
);
ability_case!(
    philosopher_moves_one,
    CardKind::Philosopher,
    shift(&[1, 4], &[1, -1]),
    Some(vec![1, 3, 3, 4, 4, 6])
);
ability_case!(
    philosopher_unbalanced,
    CardKind::Philosopher,
    shift(&[1, 4], &[2, -1]),
    None
);
ability_case!(
    philosopher_below_one,
    CardKind::Philosopher,
    shift(&[0, 1], &[2, -2]),
    None
);
ability_case!(
    philosopher_wrong_arity,
    CardKind::Philosopher,
    shift(&[0, 1, 2], &[1, -1, 0]),
    None
);
ability_case!(
    alchemist_spreads,
    CardKind::Alchemist,
    shift(&[2, 3, 4], &[1, 0, -1]),
    Some(vec![1, 2, 4, 4, 4, 6])
);
ability_case!(
    alchemist_large_swing,
    CardKind::Alchemist,
    shift(&[0, 1, 5], &[3, 2, -5]),
    Some(vec![4, 4, 3, 4, 5, 1])
);
ability_case!(
    alchemist_above_six,
    CardKind::Alchemist,
    shift(&[5, 0, 1], &[1, -1, 0]),
    None
);
ability_case!(
    maid_plus_one,
    CardKind::Maid,
    shift(&[0], &[1]),
    Some(vec![2, 2, 3, 4, 5, 6])
);
ability_case!(
    maid_plus_three,
    CardKind::Maid,
    shift(&[1], &[3]),
    Some(vec![1, 5, 3, 4, 5, 6])
);
ability_case!(maid_plus_four, CardKind::Maid, shift(&[0], &[4]), None);
ability_case!(maid_minus_one, CardKind::Maid, shift(&[2], &[-1]), None);
ability_case!(maid_past_six, CardKind::Maid, shift(&[4], &[2]), None);
ability_case!(
    astronomer_copies_fixed_three,
    CardKind::Astronomer,
    Selection::SetFace { index: 0, face: 3 },
    Some(vec![3, 2, 3, 4, 5, 6])
);
ability_case!(
    astronomer_copies_fixed_four,
    CardKind::Astronomer,
    Selection::SetFace { index: 1, face: 4 },
    Some(vec![1, 4, 3, 4, 5, 6])
);
ability_case!(
    astronomer_face_not_fixed,
    CardKind::Astronomer,
    Selection::SetFace { index: 1, face: 6 },
    None
);
ability_case!(
    noblewoman_lifts_flagged,
    CardKind::Noblewoman,
    Selection::Flags(vec![1, 0, 1, 0, 1, 0]),
    Some(vec![2, 2, 4, 4, 6, 6])
);
ability_case!(
    noblewoman_refuses_six,
    CardKind::Noblewoman,
    Selection::Flags(vec![0, 0, 0, 0, 0, 1]),
    None
);
ability_case!(
    magician_sets_any,
    CardKind::Magician,
    Selection::SetFace { index: 0, face: 6 },
    Some(vec![6, 2, 3, 4, 5, 6])
);
ability_case!(
    magician_index_out_of_range,
    CardKind::Magician,
    Selection::SetFace { index: 6, face: 6 },
    None
);
ability_case!(
    magician_face_seven,
    CardKind::Magician,
    Selection::SetFace { index: 0, face: 7 },
    None
);
ability_case!(
    nobleman_adds_two,
    CardKind::Nobleman,
    Selection::Flags(vec![2, 0, 2, 2, 0, 0]),
    Some(vec![3, 2, 5, 6, 5, 6])
);
ability_case!(
    nobleman_flag_one,
    CardKind::Nobleman,
    Selection::Flags(vec![1, 0, 0, 0, 0, 0]),
    None
);
ability_case!(
    fool_rerolls_one,
    CardKind::Fool,
    Selection::Reroll { index: 5 },
    Some(vec![1, 2, 3, 4, 5, 2])
);
ability_case!(
    merchant_short_flags,
    CardKind::Merchant,
    Selection::Flags(vec![1, 1, 1]),
    None
);
ability_case!(
    merchant_long_flags,
    CardKind::Merchant,
    Selection::Flags(vec![1, 1, 1, 0, 0, 0, 0]),
    None
);
ability_case!(
    merchant_rerolls_flagged,
    CardKind::Merchant,
    Selection::Flags(vec![1, 0, 0, 0, 0, 1]),
    Some(vec![2, 2, 3, 4, 5, 2])
);
ability_case!(
    queen_adds_chosen_face,
    CardKind::Queen,
    Selection::NewDie { face: 6 },
    Some(vec![1, 2, 3, 4, 5, 6, 6])
);
ability_case!(
    queen_face_zero,
    CardKind::Queen,
    Selection::NewDie { face: 0 },
    None
);
ability_case!(
    laborer_rejects_payload,
    CardKind::Laborer,
    Selection::Reroll { index: 0 },
    None
);

#[test]
fn fixed_face_cards_append_their_die() {
    let cases = [
        (CardKind::Laborer, 1),
        (CardKind::Guard, 2),
        (CardKind::Hunter, 3),
        (CardKind::PawnBroker, 4),
        (CardKind::Knight, 5),
        (CardKind::Bishop, 6),
    ];
    for (card, face) in cases {
        let mut player = player_with(&[], &[]);
        apply_ability(&mut player, card, &Selection::None, &mut ScriptedDice::new([1]))
            .expect("ability");
        assert_eq!(player.active_dice, vec![face], "{card}");
    }
}

#[test]
fn merchant_reroll_rolls_every_flag() {
    let mut player = player_with(&[1, 1, 1], &[]);
    let mut dice = ScriptedDice::new([2]);
    apply_ability(
        &mut player,
        CardKind::Merchant,
        &Selection::Flags(vec![1, 1, 0]),
        &mut dice,
    )
    .expect("merchant");
    assert_eq!(player.active_dice, vec![2, 2, 1]);
}

#[test]
fn immediate_cards_grow_dice_count() {
    let mut player = player_with(&[], &[]);
    player.dice_num = 0;
    assert!(fire_immediate(&mut player, CardKind::Charlatan));
    assert_eq!(player.dice_num, 1);
    assert!(fire_immediate(&mut player, CardKind::Farmer));
    assert_eq!(player.dice_num, 2);
    assert!(fire_immediate(&mut player, CardKind::General));
    assert_eq!(player.dice_num, 4);
    assert!(!fire_immediate(&mut player, CardKind::Laborer));
    assert_eq!(player.dice_num, 4);
}

#[test]
fn king_grants_a_usable_queen() {
    let mut player = player_with(&[], &[]);
    assert!(fire_immediate(&mut player, CardKind::King));
    assert_eq!(
        player.cards,
        vec![HeldCard {
            card: CardKind::Queen,
            available: true
        }]
    );
    let index = player.usable_cards()[0];
    let mut dice = ScriptedDice::new([1]);
    player
        .use_card(index, &Selection::NewDie { face: 6 }, &mut dice)
        .expect("queen");
    assert_eq!(player.active_dice, vec![6]);
    assert!(!player.cards[0].available);
}

#[test]
fn immediate_card_cannot_be_invoked() {
    let mut player = player_with(&[1, 2, 3], &[]);
    player.cards.push(HeldCard::acquired(CardKind::Farmer));
    let result = player.use_card(0, &Selection::None, &mut ScriptedDice::new([1]));
    assert_eq!(result, Err(EngineError::CardUnavailable));
    assert_eq!(player.dice_num, 3);
}

#[test]
fn ability_card_is_spent_for_the_turn() {
    let mut player = player_with(&[], &[]);
    player.cards.push(HeldCard::acquired(CardKind::Laborer));
    let mut dice = ScriptedDice::new([4]);
    player.use_card(0, &Selection::None, &mut dice).expect("laborer");
    assert_eq!(player.active_dice, vec![1]);
    assert!(!player.cards[0].available);
    assert_eq!(
        player.use_card(0, &Selection::None, &mut dice),
        Err(EngineError::CardUnavailable)
    );
    assert_eq!(
        player.use_card(7, &Selection::None, &mut dice),
        Err(EngineError::CardUnavailable)
    );
}

#[test]
fn failed_selection_keeps_card_available() {
    let mut player = player_with(&[1, 2, 3, 4, 5, 6], &[]);
    player.cards.push(HeldCard::acquired(CardKind::Philosopher));
    let result = player.use_card(0, &shift(&[0, 1], &[2, -2]), &mut ScriptedDice::new([1]));
    assert_eq!(result, Err(EngineError::InvalidSelection));
    assert!(player.cards[0].available);
    assert_eq!(player.active_dice, vec![1, 2, 3, 4, 5, 6]);
}
