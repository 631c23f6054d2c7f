//! Search for cross proportions whose box count best matches a number of days.
//!
//! A Swiss cross with arm width `w` and arm height `h` (both in boxes) is made
//! of a top arm (`h` rows of `w`), a middle band (`w` rows of `2h + w`) and a
//! bottom arm (`h` rows of `w`), for `w * (4h + w)` boxes in total.
//!
//! The search only looks at widths below `sqrt(target)` and at heights within
//! 25% of the real flag's 7:6 arm ratio. Both are pruning heuristics; the
//! closest possible count is not guaranteed to be found.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::errors::SearchError;

// The real flag's arms are 7 high for every 6 wide.
const FLAG_ARM_HEIGHT: f64 = 7.0;
const FLAG_ARM_WIDTH: f64 = 6.0;
/// Allowed deviation from the flag's arm ratio.
const RATIO_TOLERANCE: f64 = 0.25;

/// Candidate cross proportions, scored against one search target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub top_arm_width: u32,
    pub top_arm_height: u32,
    target: i64,
}

impl Solution {
    /// Total number of boxes in a cross of these proportions.
    pub fn count(&self) -> i64 {
        cross_box_count(self.top_arm_width, self.top_arm_height)
    }

    /// Distance from the target count; lower is better.
    pub fn score(&self) -> i64 {
        (self.count() - self.target).abs()
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

/// `w * (4h + w)`
pub fn cross_box_count(top_arm_width: u32, top_arm_height: u32) -> i64 {
    let (w, h) = (i64::from(top_arm_width), i64::from(top_arm_height));
    w * (4 * h + w)
}

/// Inclusive range of arm heights considered for an arm width.
pub fn height_window(top_arm_width: u32) -> (u32, u32) {
    let ideal = f64::from(top_arm_width) * FLAG_ARM_HEIGHT / FLAG_ARM_WIDTH;
    let smallest = (ideal * (1.0 - RATIO_TOLERANCE)).ceil() as u32;
    let largest = (ideal * (1.0 + RATIO_TOLERANCE)).floor() as u32;
    (smallest, largest)
}

/// Heap entry ordered by score, then by enumeration order, so the heap top is
/// the worst retained candidate and, among equal scores, the latest one.
#[derive(Debug, PartialEq, Eq)]
struct Ranked {
    score: i64,
    seq: usize,
    solution: Solution,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.score, self.seq).cmp(&(other.score, other.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds the cross proportions closest to a target box count.
#[derive(Debug, Clone, Copy)]
pub struct SolutionFinder {
    target_count: i64,
}

impl SolutionFinder {
    pub fn new(target_count: i64) -> Result<Self, SearchError> {
        if target_count < 1 {
            return Err(SearchError::InvalidTargetCount { target: target_count });
        }
        Ok(SolutionFinder { target_count })
    }

    /// Score explicit proportions against this target, whether or not the
    /// search would consider them.
    pub fn evaluate(&self, top_arm_width: u32, top_arm_height: u32) -> Solution {
        Solution { top_arm_width, top_arm_height, target: self.target_count }
    }

    /// Every candidate in the search space, in enumeration order: ascending
    /// width, then ascending height.
    pub fn candidates(&self) -> impl Iterator<Item = Solution> + use<> {
        let target = self.target_count;
        let max_width = (target as f64).sqrt();
        (1u32..)
            .take_while(move |&w| f64::from(w) < max_width)
            .flat_map(move |w| {
                let (smallest, largest) = height_window(w);
                (smallest..=largest).map(move |h| Solution {
                    top_arm_width: w,
                    top_arm_height: h,
                    target,
                })
            })
    }

    /// The `n` best candidates, best first.
    ///
    /// Fewer than `n` are returned only when the search space is smaller
    /// than `n`. Ties keep enumeration order, and a candidate that merely
    /// ties the worst retained score never displaces it.
    pub fn find_best_n(&self, n: usize) -> Result<Vec<Solution>, SearchError> {
        if n < 1 {
            return Err(SearchError::InvalidCandidateCount);
        }

        let mut heap: BinaryHeap<Ranked> = BinaryHeap::new();
        for (seq, solution) in self.candidates().enumerate() {
            let ranked = Ranked { score: solution.score(), seq, solution };
            if heap.len() < n {
                heap.push(ranked);
            } else if heap.peek().is_some_and(|worst| ranked.score < worst.score) {
                heap.pop();
                heap.push(ranked);
            }
        }

        let best: Vec<Solution> = heap
            .into_sorted_vec()
            .into_iter()
            .map(|ranked| ranked.solution)
            .collect();

        crate::log::debug!(
            target_count = self.target_count,
            requested = n,
            found = best.len(),
            "solution search finished"
        );
        Ok(best)
    }
}

/// Shorthand for `SolutionFinder::new(target_count)?.find_best_n(n)`.
pub fn find_best_n(target_count: i64, n: usize) -> Result<Vec<Solution>, SearchError> {
    SolutionFinder::new(target_count)?.find_best_n(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(solutions: &[Solution]) -> Vec<(u32, u32)> {
        solutions.iter().map(|s| (s.top_arm_width, s.top_arm_height)).collect()
    }

    #[test]
    fn canonical_flag_has_204_boxes() {
        assert_eq!(cross_box_count(6, 7), 204);
        assert_eq!(cross_box_count(1, 1), 5);

        let flag = SolutionFinder::new(204).unwrap().evaluate(6, 7);
        assert_eq!((flag.count(), flag.score(), flag.target()), (204, 0, 204));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            SolutionFinder::new(0).unwrap_err(),
            SearchError::InvalidTargetCount { target: 0 }
        );
        assert_eq!(
            find_best_n(-3, 2).unwrap_err(),
            SearchError::InvalidTargetCount { target: -3 }
        );
        assert_eq!(find_best_n(365, 0).unwrap_err(), SearchError::InvalidCandidateCount);
    }

    #[test]
    fn best_three_for_a_year() {
        let best = find_best_n(365, 3).unwrap();
        assert_eq!(pairs(&best), vec![(9, 8), (8, 9), (8, 10)]);
        assert_eq!(best.iter().map(Solution::score).collect::<Vec<_>>(), vec![4, 13, 19]);
    }

    #[test]
    fn ranking_table_for_a_year() {
        let table = find_best_n(365, 10)
            .unwrap()
            .iter()
            .map(|s| {
                format!(
                    "w={} h={} count={} score={}",
                    s.top_arm_width,
                    s.top_arm_height,
                    s.count(),
                    s.score()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(table, @r"
        w=9 h=8 count=369 score=4
        w=8 h=9 count=352 score=13
        w=8 h=10 count=384 score=19
        w=7 h=10 count=329 score=36
        w=9 h=9 count=405 score=40
        w=8 h=8 count=320 score=45
        w=8 h=11 count=416 score=51
        w=7 h=9 count=301 score=64
        w=9 h=10 count=441 score=76
        w=8 h=7 count=288 score=77
        ");
    }

    #[test]
    fn search_space_contains_canonical_flag() {
        let finder = SolutionFinder::new(365).unwrap();
        let flag = finder
            .candidates()
            .find(|s| (s.top_arm_width, s.top_arm_height) == (6, 7))
            .unwrap();
        assert_eq!(flag.count(), 204);
        assert_eq!(flag.score(), 161);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        // (6,6) and (6,8) both miss 204 by 24; (6,6) is enumerated first.
        assert_eq!(pairs(&find_best_n(204, 3).unwrap()), vec![(6, 7), (6, 6), (6, 8)]);
    }

    #[test]
    fn equal_score_does_not_evict() {
        assert_eq!(pairs(&find_best_n(204, 2).unwrap()), vec![(6, 7), (6, 6)]);
    }

    #[test]
    fn unbounded_request_returns_whole_search_space() {
        let finder = SolutionFinder::new(365).unwrap();
        let all = finder.find_best_n(usize::MAX).unwrap();
        assert_eq!(all.len(), finder.candidates().count());
        assert_eq!(pairs(&all[..3]), vec![(9, 8), (8, 9), (8, 10)]);
        assert!(all.windows(2).all(|w| w[0].score() <= w[1].score()));
    }

    #[test]
    fn small_search_space_returns_fewer() {
        let best = find_best_n(5, 10).unwrap();
        assert_eq!(pairs(&best), vec![(1, 1), (2, 2)]);
        assert_eq!(best[0].score(), 0);

        // sqrt(1) excludes every width.
        assert!(find_best_n(1, 3).unwrap().is_empty());
    }

    #[test]
    fn results_respect_bounds_and_ordering() {
        for target in [2, 17, 100, 204, 365, 1000, 4321] {
            for n in [1, 3, 10] {
                let best = find_best_n(target, n).unwrap();
                assert!(best.len() <= n);
                assert!(best.windows(2).all(|w| w[0].score() <= w[1].score()));
                for s in &best {
                    let (w, h) = (s.top_arm_width, s.top_arm_height);
                    assert!((f64::from(w)) < (target as f64).sqrt());
                    let lo = (f64::from(w) * 7.0 / 6.0 * 0.75).ceil() as u32;
                    let hi = (f64::from(w) * 7.0 / 6.0 * 1.25).floor() as u32;
                    assert!(lo <= h && h <= hi, "{w}x{h} outside {lo}..={hi}");
                    assert_eq!(s.score(), (s.count() - target).abs());
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        assert_eq!(find_best_n(777, 5).unwrap(), find_best_n(777, 5).unwrap());
    }

    #[test]
    fn best_candidate_is_never_beaten_in_search_space() {
        let finder = SolutionFinder::new(1000).unwrap();
        let best = finder.find_best_n(1).unwrap()[0];
        assert!(finder.candidates().all(|s| s.score() >= best.score()));
    }
}
