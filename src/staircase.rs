//! Counting staircases: strictly decreasing sequences of two or more positive step heights
//! that use up exactly `n` bricks.

use std::{
    fmt::{Display, Error, Formatter},
    mem,
};

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::InvalidInput;

pub const MIN_BRICKS: u32 = 3;
pub const MAX_BRICKS: u32 = 200;

fn tri(n: u32) -> u32 {
    n * (n + 1) / 2
}

/// Smallest first step `s` for which `s, s - 1, ..., 1` holds at least `remaining` bricks.
/// Any shorter first step leaves bricks that no strictly decreasing tail can absorb.
pub fn min_first_step(remaining: u32) -> u32 {
    let mut s = 1;
    while tri(s) < remaining {
        s += 1;
    }
    s
}

/// Memoised staircase counter. The memo lives as long as the counter and is never cleared;
/// entries are pure functions of their key so reusing a counter across calls is safe.
#[derive(Debug, Default)]
pub struct StaircaseCounter {
    // (bricks remaining, largest allowed next step) -> number of tails
    memo: FxHashMap<(u32, u32), u64>,
}

impl StaircaseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of strictly decreasing sequences (a single step included) summing to `remaining`
    /// whose first step is at most `max_first`.
    pub fn ways(&mut self, remaining: u32, max_first: u32) -> u64 {
        if remaining == 0 {
            return 1;
        }
        let key = (remaining, max_first);
        if let Some(&n) = self.memo.get(&key) {
            return n;
        }

        let upper = max_first.min(remaining);
        let total: u64 = (min_first_step(remaining)..=upper)
            .map(|s| self.ways(remaining - s, s - 1))
            .sum();
        self.memo.insert(key, total);
        total
    }

    /// Number of staircases built from exactly `n` bricks. Capping the first step at `n - 1`
    /// rules out the single-step "staircase".
    ///
    /// Unchecked; the count fits a `u64` well past 200 bricks.
    pub fn count(&mut self, n: u32) -> u64 {
        if n < 2 {
            return 0;
        }
        let count = self.ways(n, n - 1);
        debug!("{n} bricks: {count} staircases, memo holds {}", self.memo.len());
        count
    }

    pub fn count_checked(&mut self, n: u32) -> Result<u64, InvalidInput> {
        if !(MIN_BRICKS..=MAX_BRICKS).contains(&n) {
            return Err(InvalidInput::BrickCount(n));
        }
        Ok(self.count(n))
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

/// Number of staircases for `3 <= n <= 200` bricks, using a fresh memo.
pub fn count_staircases(n: u32) -> Result<u64, InvalidInput> {
    StaircaseCounter::new().count_checked(n)
}

/// A staircase, tallest step first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Staircase {
    pub steps: Vec<u32>,
}

impl Staircase {
    pub fn bricks(&self) -> u32 {
        self.steps.iter().sum()
    }
}

/// Draws the staircase as columns of `#`, one column per step.
impl Display for Staircase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let height = self.steps.first().copied().unwrap_or(0);
        for level in (1..=height).rev() {
            if level < height {
                writeln!(f)?;
            }
            let cols = self.steps.iter().take_while(|&&h| h >= level).count();
            write!(f, "{}", "#".repeat(cols))?;
        }
        Ok(())
    }
}

/// Calls `cb` on every staircase of `n` bricks, in descending lexicographic order.
pub fn for_each_staircase<F: FnMut(&Staircase)>(n: u32, cb: &mut F) {
    fn helper<F: FnMut(&Staircase)>(remaining: u32, max: u32, cur: &mut Vec<u32>, cb: &mut F) {
        if remaining == 0 {
            if cur.len() >= 2 {
                let staircase = Staircase {
                    steps: mem::take(cur),
                };
                cb(&staircase);
                let Staircase { steps: mut steps } = staircase;
                mem::swap(&mut steps, cur);
            }
            return;
        }
        for s in (min_first_step(remaining)..=max.min(remaining)).rev() {
            cur.push(s);
            helper(remaining - s, s - 1, cur, cb);
            cur.pop();
        }
    }

    helper(n, n.saturating_sub(1), &mut vec![], cb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_first_step_is_tight() {
        assert_eq!(min_first_step(1), 1);
        assert_eq!(min_first_step(2), 2);
        assert_eq!(min_first_step(3), 2);
        assert_eq!(min_first_step(4), 3);
        assert_eq!(min_first_step(6), 3);
        assert_eq!(min_first_step(7), 4);
        for r in 1..500 {
            let s = min_first_step(r);
            assert!(tri(s) >= r);
            assert!(tri(s - 1) < r);
        }
    }

    #[test]
    fn small_counts() {
        let mut counter = StaircaseCounter::new();
        assert_eq!(counter.count(0), 0);
        assert_eq!(counter.count(1), 0);
        assert_eq!(counter.count(2), 0);
        assert_eq!(counter.count(3), 1);
        assert_eq!(counter.count(4), 1);
        assert_eq!(counter.count(5), 2);
        assert_eq!(counter.count(6), 3);
        assert_eq!(counter.count(10), 9);
    }

    #[test]
    fn two_hundred_bricks() {
        assert_eq!(count_staircases(200), Ok(487_067_745));
    }

    #[test]
    fn reused_counter_agrees_with_fresh_ones() {
        let mut shared = StaircaseCounter::new();
        let first = shared.count(120);
        let memo = shared.memo_len();
        assert!(memo > 0);
        assert_eq!(shared.count(120), first);
        assert_eq!(shared.memo_len(), memo);
        for n in (3..=60).rev() {
            assert_eq!(shared.count(n), StaircaseCounter::new().count(n));
        }
    }

    #[test]
    fn rejects_out_of_range_counts() {
        assert_eq!(count_staircases(2), Err(InvalidInput::BrickCount(2)));
        assert_eq!(count_staircases(201), Err(InvalidInput::BrickCount(201)));
        assert_eq!(count_staircases(3), Ok(1));
    }

    #[test]
    fn enumerates_in_descending_order() {
        let mut all = vec![];
        for_each_staircase(7, &mut |s| all.push(s.steps.clone()));
        assert_eq!(all, vec![vec![6, 1], vec![5, 2], vec![4, 3], vec![4, 2, 1]]);
    }

    #[test]
    fn draws_bricks() {
        let s = Staircase { steps: vec![4, 1] };
        assert_eq!(s.to_string(), "#\n#\n#\n##");
        let s = Staircase { steps: vec![3, 2] };
        assert_eq!(s.to_string(), "#\n##\n##");
        assert_eq!(s.bricks(), 5);
    }
}
