use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Inclusive integer interval `[lo, hi]`.
///
/// An interval of length `n` covers exactly `n` positions, so
/// `hi == lo + n - 1` and a single position is `[p, p]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    lo: u64,
    hi: u64,
}

impl Interval {
    /// Builds `[lo, hi]`. Callers must uphold `lo <= hi`.
    pub const fn new(lo: u64, hi: u64) -> Self {
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    /// Builds the interval starting at `lo` that covers `length` positions.
    pub const fn from_start(lo: u64, length: u64) -> Self {
        debug_assert!(length >= 1);
        Self::new(lo, lo + length - 1)
    }

    pub const fn lo(&self) -> u64 {
        self.lo
    }

    pub const fn hi(&self) -> u64 {
        self.hi
    }

    /// Number of positions covered.
    pub const fn length(&self) -> u64 {
        self.hi - self.lo + 1
    }

    /// True when the two intervals share at least one position.
    pub const fn overlaps(&self, other: &Interval) -> bool {
        !(self.lo > other.hi || self.hi < other.lo)
    }

    pub const fn contains(&self, point: u64) -> bool {
        self.lo <= point && point <= self.hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lo, hi) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid interval '{s}': expected 'lo-hi'"))?;
        let lo: u64 = lo
            .trim()
            .parse()
            .map_err(|e| format!("Invalid lower bound in '{s}': {e}"))?;
        let hi: u64 = hi
            .trim()
            .parse()
            .map_err(|e| format!("Invalid upper bound in '{s}': {e}"))?;
        if lo > hi {
            return Err(format!("Invalid interval '{s}': {lo} exceeds {hi}"));
        }
        Ok(Self::new(lo, hi))
    }
}

/// Collection of mutually non-overlapping intervals, grown one candidate at
/// a time and finalized into ascending order.
#[derive(Debug, Clone, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// True when `candidate` overlaps none of the accepted intervals.
    pub fn is_disjoint(&self, candidate: &Interval) -> bool {
        self.intervals.iter().all(|kept| !kept.overlaps(candidate))
    }

    /// Accepts `candidate` only if it keeps the set non-overlapping.
    pub fn try_insert(&mut self, candidate: Interval) -> bool {
        if !self.is_disjoint(&candidate) {
            return false;
        }
        self.intervals.push(candidate);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Finalizes the set: intervals sorted by ascending lower bound.
    pub fn into_sorted_vec(mut self) -> Vec<Interval> {
        self.intervals.sort_unstable();
        self.intervals
    }
}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
