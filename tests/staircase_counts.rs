use lambchop::count_staircases;
use lambchop::staircase::{for_each_staircase, StaircaseCounter};
use lambchop::InvalidInput;
use quickcheck_macros::quickcheck;

/// Counts subsets of `1..n` with at least two members summing to `n` by trying every
/// include/exclude choice; a set of distinct heights is exactly one staircase.
fn brute_force(n: u32) -> u64 {
    fn subsets(next: u32, n: u32, sum: u32, len: usize) -> u64 {
        if sum == n {
            return u64::from(len >= 2);
        }
        if next >= n {
            return 0;
        }
        let without = subsets(next + 1, n, sum, len);
        let with = if sum + next <= n {
            subsets(next + 1, n, sum + next, len + 1)
        } else {
            0
        };
        without + with
    }

    subsets(1, n, 0, 0)
}

#[test]
fn known_answers() {
    assert_eq!(count_staircases(3), Ok(1));
    assert_eq!(count_staircases(4), Ok(1));
    assert_eq!(count_staircases(5), Ok(2));
    assert_eq!(count_staircases(200), Ok(487_067_745));
}

#[test]
fn matches_exhaustive_enumeration_up_to_30() {
    for n in 3..=30 {
        assert_eq!(count_staircases(n), Ok(brute_force(n)), "n = {n}");
    }
}

#[test]
fn out_of_range_is_rejected() {
    assert_eq!(count_staircases(0), Err(InvalidInput::BrickCount(0)));
    assert_eq!(count_staircases(2), Err(InvalidInput::BrickCount(2)));
    assert_eq!(count_staircases(1000), Err(InvalidInput::BrickCount(1000)));
}

#[test]
fn counting_twice_gives_the_same_answer() {
    for n in [3, 17, 99, 200] {
        assert_eq!(count_staircases(n), count_staircases(n));
    }
}

#[quickcheck]
fn enumeration_agrees_with_count(n: u8) -> bool {
    let n = u32::from(n % 60);
    let mut seen = 0u64;
    let mut valid = true;
    for_each_staircase(n, &mut |s| {
        seen += 1;
        valid &= s.bricks() == n
            && s.steps.len() >= 2
            && s.steps.windows(2).all(|w| w[0] > w[1])
            && s.steps.iter().all(|&h| h > 0);
    });
    valid && seen == StaircaseCounter::new().count(n)
}
