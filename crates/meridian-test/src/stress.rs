//! Offset Cache Stress Harness
//!
//! Hammers one `OffsetCache` from several threads with a seeded mix of:
//! - 15-minute aligned offsets (interned)
//! - Arbitrary in-range offsets (built fresh)
//! - Out-of-range offsets (rejected)
//!
//! and then checks that every aligned value converged on one stored
//! instance and that every offset kept its requested value.

use std::collections::HashMap;
use std::thread;

use meridian_core::MeridianError;
use meridian_zone::{OffsetCache, ZoneOffset, CANONICAL_ALIGNMENT_SECONDS, MAX_SECONDS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

/// Stress run configuration
#[derive(Clone, Debug)]
pub struct StressConfig {
    /// Worker threads
    pub threads: usize,
    /// Factory calls per thread
    pub calls_per_thread: usize,
    /// Share of calls using arbitrary in-range seconds (0.0 - 1.0)
    pub unaligned_ratio: f64,
    /// Share of calls using out-of-range seconds (0.0 - 1.0)
    pub invalid_ratio: f64,
    /// Base RNG seed; thread `i` uses `seed + i`
    pub seed: u64,
}

impl Default for StressConfig {
    fn default() -> Self {
        StressConfig {
            threads: 4,
            calls_per_thread: 2_000,
            unaligned_ratio: 0.2,
            invalid_ratio: 0.05,
            seed: 42,
        }
    }
}

/// Outcome of a stress run
#[derive(Clone, Debug, Default)]
pub struct StressResult {
    /// Factory calls made
    pub calls: u64,
    /// Calls rejected as invalid
    pub rejected: u64,
    /// Rejections for values that were actually in range
    pub false_rejections: u64,
    /// Invalid values that were accepted
    pub false_acceptances: u64,
    /// Offsets whose total seconds differed from the request
    pub value_mismatches: u64,
    /// Aligned offsets not sharing the cache's stored instance
    pub identity_mismatches: u64,
    /// Workers that panicked before reporting
    pub panicked_workers: u64,
    /// Canonical instances held by the cache afterwards
    pub cached: usize,
}

impl StressResult {
    /// True when the run saw no correctness violation
    pub fn is_clean(&self) -> bool {
        self.false_rejections == 0
            && self.false_acceptances == 0
            && self.value_mismatches == 0
            && self.identity_mismatches == 0
            && self.panicked_workers == 0
    }

    fn merge(&mut self, other: &StressResult) {
        self.calls += other.calls;
        self.rejected += other.rejected;
        self.false_rejections += other.false_rejections;
        self.false_acceptances += other.false_acceptances;
        self.value_mismatches += other.value_mismatches;
        self.identity_mismatches += other.identity_mismatches;
    }
}

/// Offset cache stress runner
pub struct CacheStress<'a> {
    cache: &'a OffsetCache,
    config: StressConfig,
}

impl<'a> CacheStress<'a> {
    pub fn new(cache: &'a OffsetCache, config: StressConfig) -> Self {
        CacheStress { cache, config }
    }

    /// Run all workers to completion and verify the cache afterwards
    pub fn run(&self) -> StressResult {
        let mut result = StressResult::default();

        let joined: Vec<thread::Result<(StressResult, HashMap<i32, ZoneOffset>)>> =
            thread::scope(|scope| {
                let workers: Vec<_> = (0..self.config.threads)
                    .map(|i| {
                        scope.spawn(move || self.worker(self.config.seed.wrapping_add(i as u64)))
                    })
                    .collect();
                workers.into_iter().map(|worker| worker.join()).collect()
            });
        let outcomes = collect_workers(joined, &mut result);

        for (partial, aligned) in &outcomes {
            result.merge(partial);
            for (&total_seconds, offset) in aligned {
                match self.cache.of_total_seconds(total_seconds) {
                    Ok(stored) if ZoneOffset::same_instance(&stored, offset) => {}
                    _ => result.identity_mismatches += 1,
                }
            }
        }
        result.cached = self.cache.len();

        info!(
            calls = result.calls,
            rejected = result.rejected,
            panicked_workers = result.panicked_workers,
            cached = result.cached,
            clean = result.is_clean(),
            "offset cache stress run finished"
        );
        result
    }

    fn worker(&self, seed: u64) -> (StressResult, HashMap<i32, ZoneOffset>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut result = StressResult::default();
        let mut aligned = HashMap::new();
        let max_quarters = MAX_SECONDS / CANONICAL_ALIGNMENT_SECONDS;

        for _ in 0..self.config.calls_per_thread {
            let roll: f64 = rng.gen();
            let total_seconds = if roll < self.config.invalid_ratio {
                let magnitude = rng.gen_range(MAX_SECONDS + 1..=i32::MAX);
                if rng.gen_bool(0.5) {
                    -magnitude
                } else {
                    magnitude
                }
            } else if roll < self.config.invalid_ratio + self.config.unaligned_ratio {
                rng.gen_range(-MAX_SECONDS..=MAX_SECONDS)
            } else {
                rng.gen_range(-max_quarters..=max_quarters) * CANONICAL_ALIGNMENT_SECONDS
            };
            let in_range = total_seconds.abs() <= MAX_SECONDS;

            result.calls += 1;
            match self.cache.of_total_seconds(total_seconds) {
                Ok(offset) => {
                    if !in_range {
                        result.false_acceptances += 1;
                    }
                    if offset.total_seconds() != total_seconds {
                        result.value_mismatches += 1;
                    }
                    if total_seconds % CANONICAL_ALIGNMENT_SECONDS == 0 {
                        // Keep the first instance seen; later ones must be the same
                        let first = aligned.entry(total_seconds).or_insert_with(|| offset.clone());
                        if !ZoneOffset::same_instance(first, &offset) {
                            result.identity_mismatches += 1;
                        }
                    }
                }
                Err(MeridianError::InvalidOffset(_)) => {
                    result.rejected += 1;
                    if in_range {
                        result.false_rejections += 1;
                    }
                }
                Err(_) => result.false_rejections += 1,
            }
        }

        (result, aligned)
    }
}

/// Keep the output of every worker that finished; count the ones that panicked
fn collect_workers<T>(joined: Vec<thread::Result<T>>, result: &mut StressResult) -> Vec<T> {
    let mut completed = Vec::with_capacity(joined.len());
    for outcome in joined {
        match outcome {
            Ok(outcome) => completed.push(outcome),
            Err(_) => {
                warn!("offset cache stress worker panicked");
                result.panicked_workers += 1;
            }
        }
    }
    completed
}

/// Preset stress scenarios
pub mod scenarios {
    use super::*;

    /// Few threads, mostly real-world offsets
    pub fn light(cache: &OffsetCache) -> CacheStress<'_> {
        CacheStress::new(
            cache,
            StressConfig {
                threads: 2,
                calls_per_thread: 500,
                ..StressConfig::default()
            },
        )
    }

    /// Many threads racing on the same small set of aligned offsets
    pub fn contended(cache: &OffsetCache) -> CacheStress<'_> {
        CacheStress::new(
            cache,
            StressConfig {
                threads: 16,
                calls_per_thread: 2_000,
                unaligned_ratio: 0.0,
                invalid_ratio: 0.0,
                seed: 7,
            },
        )
    }

    /// Mostly odd and invalid offsets
    pub fn hostile(cache: &OffsetCache) -> CacheStress<'_> {
        CacheStress::new(
            cache,
            StressConfig {
                threads: 4,
                calls_per_thread: 1_000,
                unaligned_ratio: 0.5,
                invalid_ratio: 0.4,
                seed: 1337,
            },
        )
    }
}
