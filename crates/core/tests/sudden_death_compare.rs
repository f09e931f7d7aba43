use dicecourt_core::{best_group, compare_dice, takes_lead};
use std::cmp::Ordering;

macro_rules! compare_case {
    ($name:ident, $challenger:expr, $leader:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let challenger: Vec<u8> = $challenger.to_vec();
            let leader: Vec<u8> = $leader.to_vec();
            assert_eq!(compare_dice(&challenger, &leader), $expected);
            assert_eq!(compare_dice(&leader, &challenger), $expected.reverse());
        }
    };
}

compare_case!(
    triple_beats_higher_pair,
    [3, 3, 3, 4, 5],
    [4, 4, 1, 2, 3],
    Ordering::Greater
);
compare_case!(
    quad_beats_triple,
    [3, 3, 3, 4, 5, 4, 5],
    [6, 6, 6, 6, 3],
    Ordering::Less
);
compare_case!(
    equal_triples_tie,
    [3, 3, 3, 4, 5],
    [3, 3, 4, 6, 3, 4, 6],
    Ordering::Equal
);
compare_case!(
    higher_quad_wins,
    [3, 3, 3, 3, 5],
    [2, 2, 2, 2, 1, 1, 1, 1],
    Ordering::Greater
);
compare_case!(
    five_ones_beat_quad,
    [3, 3, 3, 3, 5],
    [2, 2, 2, 2, 1, 1, 1, 1, 1],
    Ordering::Less
);
compare_case!(
    singles_by_top_face,
    [1, 2, 6],
    [1, 2, 5],
    Ordering::Greater
);
compare_case!(empty_loses, [], [1], Ordering::Less);

#[test]
fn best_group_reports_size_and_face() {
    assert_eq!(best_group(&[3, 3, 3, 4, 5]), (3, 3));
    assert_eq!(best_group(&[4, 4, 1, 2, 3]), (2, 4));
    assert_eq!(best_group(&[6, 1, 1, 6]), (2, 6));
}

#[test]
fn queen_holder_wins_exact_ties() {
    let leader = [5, 5, 2];
    let challenger = [5, 5, 1];
    assert!(!takes_lead(&challenger, &leader, false));
    assert!(takes_lead(&challenger, &leader, true));
    assert!(!takes_lead(&[4, 4, 6], &leader, true));
    assert!(takes_lead(&[5, 5, 5], &leader, false));
}

#[test]
fn comparison_is_antisymmetric_over_small_rolls() {
    let rolls: Vec<Vec<u8>> = (1..=6u8)
        .flat_map(|a| (1..=6u8).flat_map(move |b| (1..=6u8).map(move |c| vec![a, b, c])))
        .collect();
    for left in rolls.iter().step_by(7) {
        for right in rolls.iter().step_by(5) {
            assert_eq!(
                compare_dice(left, right),
                compare_dice(right, left).reverse(),
                "{left:?} vs {right:?}"
            );
        }
    }
}
