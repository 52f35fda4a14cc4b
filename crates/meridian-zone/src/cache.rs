//! Offset factory and canonical instance cache
//!
//! Every constructor funnels into [`OffsetCache::of_total_seconds`]. Offsets
//! on a 15-minute boundary are interned so repeated requests share one
//! record; other offsets are rare and are built fresh each time.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use meridian_core::{MeridianError, MeridianResult, OffsetError, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::{validate_hms, validate_total_seconds, ZoneOffset, MAX_SECONDS};

/// Offsets divisible by this many seconds are canonicalized
pub const CANONICAL_ALIGNMENT_SECONDS: i32 = 15 * SECONDS_PER_MINUTE;

static GLOBAL: OnceLock<OffsetCache> = OnceLock::new();

/// Offset cache configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetCacheConfig {
    /// Intern canonical offsets; when false every call builds a fresh offset
    pub enabled: bool,
    /// Divisor selecting which offsets are interned; non-positive disables
    pub alignment_seconds: i32,
}

impl Default for OffsetCacheConfig {
    fn default() -> Self {
        OffsetCacheConfig {
            enabled: true,
            alignment_seconds: CANONICAL_ALIGNMENT_SECONDS,
        }
    }
}

impl OffsetCacheConfig {
    /// Configuration that never interns
    pub fn disabled() -> Self {
        OffsetCacheConfig {
            enabled: false,
            ..Self::default()
        }
    }

    #[inline]
    fn interns(&self, total_seconds: i32) -> bool {
        self.enabled && self.alignment_seconds > 0 && total_seconds % self.alignment_seconds == 0
    }
}

/// Factory for [`ZoneOffset`] values, holding the canonical instances
///
/// `UTC`, `MIN` and `MAX` are built as part of creating the cache, so they
/// exist before any factory call returns.
pub struct OffsetCache {
    entries: RwLock<HashMap<i32, ZoneOffset>>,
    utc: ZoneOffset,
    min: ZoneOffset,
    max: ZoneOffset,
    config: OffsetCacheConfig,
}

impl OffsetCache {
    /// Create a cache with the default configuration
    pub fn new() -> Self {
        Self::with_config(OffsetCacheConfig::default())
    }

    /// Create a cache with a custom configuration
    pub fn with_config(config: OffsetCacheConfig) -> Self {
        debug!(?config, "creating zone offset cache");

        let utc = ZoneOffset::from_validated(0);
        let min = ZoneOffset::from_validated(-MAX_SECONDS);
        let max = ZoneOffset::from_validated(MAX_SECONDS);

        let mut entries = HashMap::new();
        for offset in [&utc, &min, &max] {
            if config.interns(offset.total_seconds()) {
                entries.insert(offset.total_seconds(), offset.clone());
            }
        }

        OffsetCache {
            entries: RwLock::new(entries),
            utc,
            min,
            max,
            config,
        }
    }

    /// Process-wide cache behind the `ZoneOffset::of_*` constructors
    pub fn global() -> &'static OffsetCache {
        GLOBAL.get_or_init(OffsetCache::new)
    }

    pub fn config(&self) -> &OffsetCacheConfig {
        &self.config
    }

    pub fn utc(&self) -> ZoneOffset {
        self.utc.clone()
    }

    pub fn min(&self) -> ZoneOffset {
        self.min.clone()
    }

    pub fn max(&self) -> ZoneOffset {
        self.max.clone()
    }

    /// Number of canonical instances held
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn of_hours(&self, hours: i32) -> MeridianResult<ZoneOffset> {
        self.of_hours_minutes_seconds(hours, 0, 0)
    }

    pub fn of_hours_minutes(&self, hours: i32, minutes: i32) -> MeridianResult<ZoneOffset> {
        self.of_hours_minutes_seconds(hours, minutes, 0)
    }

    pub fn of_hours_minutes_seconds(
        &self,
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> MeridianResult<ZoneOffset> {
        validate_hms(hours, minutes, seconds).map_err(rejected)?;
        self.of_total_seconds(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)
    }

    pub fn of_total_minutes(&self, total_minutes: i32) -> MeridianResult<ZoneOffset> {
        let total_seconds = total_minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .ok_or(OffsetError::TotalMinutesOutOfRange(total_minutes))
            .map_err(rejected)?;
        self.of_total_seconds(total_seconds)
    }

    pub fn of_total_seconds(&self, total_seconds: i32) -> MeridianResult<ZoneOffset> {
        validate_total_seconds(total_seconds).map_err(rejected)?;

        if !self.config.interns(total_seconds) {
            return Ok(ZoneOffset::from_validated(total_seconds));
        }

        let cached = self.entries.read().get(&total_seconds).cloned();
        if let Some(offset) = cached {
            trace!(total_seconds, "zone offset cache hit");
            return Ok(offset);
        }

        trace!(total_seconds, "zone offset cache miss");
        let offset = ZoneOffset::from_validated(total_seconds);
        // Another thread may have inserted since the read; keep the first one
        let mut entries = self.entries.write();
        Ok(entries.entry(total_seconds).or_insert(offset).clone())
    }
}

impl Default for OffsetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OffsetCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffsetCache")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

fn rejected(err: OffsetError) -> MeridianError {
    debug!(%err, "rejected zone offset");
    err.into()
}
