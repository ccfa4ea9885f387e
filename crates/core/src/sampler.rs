use std::collections::HashSet;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SamplerConfig;
use crate::error::{CoreError, Result};
use crate::interval::{Interval, IntervalSet};
use crate::options::Strategy;

/// Draws after which the rejection loop reports that it is still running.
const REJECTION_WARN_EVERY: u64 = 1_000_000;

/// Draws `config.count` non-overlapping intervals of `config.length`
/// positions each inside `[config.start, config.end]`, sorted by ascending
/// lower bound.
///
/// Seeds a [`StdRng`] from `config.seed` (or OS entropy) and delegates to
/// [`generate_with`].
///
/// # Errors
///
/// - [`CoreError::ZeroLength`] when `config.length` is 0.
/// - [`CoreError::InvalidBounds`] when `config.start > config.end`.
/// - [`CoreError::Capacity`] when the window cannot hold the requested
///   intervals: the number of candidate start positions
///   (`end - start - length + 1`) is below `count * length`.
pub fn generate(config: &SamplerConfig) -> Result<Vec<Interval>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_with(config, &mut rng)
}

/// [`generate`] with a caller-supplied RNG.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with<R: Rng>(config: &SamplerConfig, rng: &mut R) -> Result<Vec<Interval>> {
    validate(config)?;
    if config.count == 0 {
        return Ok(Vec::new());
    }
    let intervals = match config.strategy {
        Strategy::Gaps => place_gaps(config, rng),
        Strategy::Rejection => reject_until_placed(config, rng),
    };
    debug_assert!(intervals.windows(2).all(|pair| pair[0].hi() < pair[1].lo()));
    Ok(intervals)
}

fn validate(config: &SamplerConfig) -> Result<()> {
    if config.length == 0 {
        return Err(CoreError::ZeroLength);
    }
    if config.start > config.end {
        return Err(CoreError::InvalidBounds {
            start: config.start,
            end: config.end,
        });
    }
    let span = usable_span(config);
    let required = i128::from(config.count) * i128::from(config.length);
    if span < required {
        return Err(CoreError::Capacity { span, required });
    }
    Ok(())
}

/// Number of candidate start positions, `end - start - length + 1`.
/// Negative when not even one interval fits.
fn usable_span(config: &SamplerConfig) -> i128 {
    i128::from(config.end) - i128::from(config.start) - i128::from(config.length) + 1
}

/// Lays the intervals down in one pass, left to right.
///
/// With `slack` spare positions once all intervals are placed, a layout is
/// determined by how much of the slack sits before each interval. Drawing
/// `count` distinct values from `[0, slack + count)` and sorting them gives
/// `pick_i - i`, the total gap preceding interval `i`; every valid layout is
/// produced by exactly one draw, so the result is uniform over layouts.
fn place_gaps<R: Rng>(config: &SamplerConfig, rng: &mut R) -> Vec<Interval> {
    let count = config.count;
    let length = u128::from(config.length);
    let window = u128::from(config.end) - u128::from(config.start) + 1;
    // Capacity check guarantees slack >= length.
    let slack = window - u128::from(count) * length;

    let mut picks = draw_distinct(rng, slack + u128::from(count), count);
    picks.sort_unstable();
    picks
        .into_iter()
        .enumerate()
        .map(|(i, pick)| {
            let index = i as u128;
            let gap_prefix = pick - index;
            let lo = u128::from(config.start) + index * length + gap_prefix;
            debug_assert!(lo + length - 1 <= u128::from(config.end));
            Interval::from_start(lo as u64, config.length)
        })
        .collect()
}

/// Floyd's sampling: `count` distinct values drawn uniformly from
/// `[0, universe)`. Requires `universe >= count`.
fn draw_distinct<R: Rng>(rng: &mut R, universe: u128, count: u64) -> Vec<u128> {
    let capacity = usize::try_from(count).unwrap_or(usize::MAX);
    let mut chosen: HashSet<u128> = HashSet::with_capacity(capacity);
    for upper in (universe - u128::from(count))..universe {
        let pick = rng.gen_range(0..=upper);
        if !chosen.insert(pick) {
            chosen.insert(upper);
        }
    }
    chosen.into_iter().collect()
}

/// Classic draw-and-test loop: sample a start position, reject it when the
/// start was already covered or the candidate overlaps an accepted interval,
/// repeat until `count` intervals are placed. Unbounded by design; near the
/// capacity limit this can take arbitrarily long.
fn reject_until_placed<R: Rng>(config: &SamplerConfig, rng: &mut R) -> Vec<Interval> {
    let target = usize::try_from(config.count).unwrap_or(usize::MAX);
    // Highest admissible start; at least `start` once the capacity check
    // has passed.
    let max_start = config.end - (config.length - 1);

    let mut accepted = IntervalSet::with_capacity(target);
    let mut used_positions: HashSet<u64> = HashSet::new();
    let mut draws: u64 = 0;
    while accepted.len() < target {
        draws += 1;
        if draws % REJECTION_WARN_EVERY == 0 {
            warn!(
                "rejection sampling still running: {} of {target} placed after {draws} draws",
                accepted.len()
            );
        }
        let lo = rng.gen_range(config.start..=max_start);
        if used_positions.contains(&lo) {
            continue;
        }
        let candidate = Interval::from_start(lo, config.length);
        if !accepted.try_insert(candidate) {
            continue;
        }
        used_positions.extend(candidate.lo()..=candidate.hi());
        debug!(
            "accepted {candidate} ({} of {target} after {draws} draws)",
            accepted.len()
        );
    }
    accepted.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamplerConfigBuilder;

    fn config(start: u64, end: u64, length: u64, count: u64, strategy: Strategy) -> SamplerConfig {
        SamplerConfigBuilder::default()
            .start(start)
            .end(end)
            .length(length)
            .count(count)
            .strategy(strategy)
            .build()
            .unwrap()
    }

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn assert_valid_layout(intervals: &[Interval], config: &SamplerConfig) {
        assert_eq!(intervals.len() as u64, config.count);
        for interval in intervals {
            assert_eq!(interval.length(), config.length);
            assert!(interval.lo() >= config.start);
            assert!(interval.hi() <= config.end);
        }
        for pair in intervals.windows(2) {
            assert!(pair[0].hi() < pair[1].lo(), "{} overlaps {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn gaps_places_requested_count_within_bounds() {
        let config = config(0, 1000, 10, 5, Strategy::Gaps);
        let intervals = generate_with(&config, &mut seeded(42)).unwrap();
        assert_valid_layout(&intervals, &config);
    }

    #[test]
    fn rejection_places_requested_count_within_bounds() {
        let config = config(0, 1000, 10, 5, Strategy::Rejection);
        let intervals = generate_with(&config, &mut seeded(42)).unwrap();
        assert_valid_layout(&intervals, &config);
    }

    #[test]
    fn default_window_yields_twenty_ranges() {
        for strategy in [Strategy::Gaps, Strategy::Rejection] {
            let config = SamplerConfig {
                strategy,
                ..SamplerConfig::default()
            };
            let intervals = generate_with(&config, &mut seeded(7)).unwrap();
            assert_valid_layout(&intervals, &config);
        }
    }

    #[test]
    fn exact_fit_window_is_accepted() {
        // span = 39 - 0 - 10 + 1 = 30 = 3 * 10
        let config = config(0, 39, 10, 3, Strategy::Gaps);
        let intervals = generate_with(&config, &mut seeded(1)).unwrap();
        assert_valid_layout(&intervals, &config);
    }

    #[test]
    fn window_one_position_too_small_is_rejected() {
        // span = 100 - 0 - 100 + 1 = 1 < 2 * 100
        let config = config(0, 100, 100, 2, Strategy::Gaps);
        let err = generate_with(&config, &mut seeded(1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Capacity {
                span: 1,
                required: 200
            }
        ));
    }

    #[test]
    fn zero_count_returns_empty_without_sampling() {
        for strategy in [Strategy::Gaps, Strategy::Rejection] {
            let config = config(5, 9, 3, 0, strategy);
            let intervals = generate_with(&config, &mut seeded(1)).unwrap();
            assert!(intervals.is_empty());
        }
    }

    #[test]
    fn zero_count_in_an_impossibly_small_window_still_fails() {
        // span = 3 - 0 - 10 + 1 = -6 < 0
        let config = config(0, 3, 10, 0, Strategy::Gaps);
        let err = generate_with(&config, &mut seeded(1)).unwrap_err();
        assert!(matches!(err, CoreError::Capacity { span: -6, required: 0 }));
    }

    #[test]
    fn zero_length_is_rejected() {
        let config = config(0, 100, 0, 1, Strategy::Gaps);
        let err = generate_with(&config, &mut seeded(1)).unwrap_err();
        assert!(matches!(err, CoreError::ZeroLength));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = config(10, 5, 1, 1, Strategy::Gaps);
        let err = generate_with(&config, &mut seeded(1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidBounds { start: 10, end: 5 }));
    }

    #[test]
    fn single_interval_at_the_exact_fit_boundary() {
        // span = 19 - 0 - 10 + 1 = 10 = 1 * 10
        let config = config(0, 19, 10, 1, Strategy::Gaps);
        let intervals = generate_with(&config, &mut seeded(3)).unwrap();
        assert_valid_layout(&intervals, &config);
    }

    #[test]
    fn same_seed_reproduces_the_same_layout() {
        for strategy in [Strategy::Gaps, Strategy::Rejection] {
            let config = SamplerConfig {
                start: 0,
                end: 1_000_000,
                length: 50,
                count: 8,
                strategy,
                seed: Some(99),
            };
            let first = generate(&config).unwrap();
            let second = generate(&config).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn different_seeds_produce_different_layouts() {
        let base = SamplerConfig {
            start: 0,
            end: 1_000_000,
            length: 50,
            count: 8,
            strategy: Strategy::Gaps,
            seed: Some(1),
        };
        let other = SamplerConfig {
            seed: Some(2),
            ..base.clone()
        };
        assert_ne!(generate(&base).unwrap(), generate(&other).unwrap());
    }

    #[test]
    fn floyd_draw_returns_distinct_values_below_universe() {
        let mut rng = seeded(11);
        let picks = draw_distinct(&mut rng, 100, 30);
        assert_eq!(picks.len(), 30);
        let unique: HashSet<&u128> = picks.iter().collect();
        assert_eq!(unique.len(), 30);
        assert!(picks.iter().all(|&p| p < 100));
    }

    #[test]
    fn floyd_draw_covers_a_full_universe() {
        let mut rng = seeded(11);
        let mut picks = draw_distinct(&mut rng, 10, 10);
        picks.sort_unstable();
        assert_eq!(picks, (0..10).collect::<Vec<u128>>());
    }
}
