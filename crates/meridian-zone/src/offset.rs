//! Fixed offset from UTC
//!
//! `ZoneOffset` is an immutable handle; clones share one record holding the
//! total seconds, the canonical id and the constant rules. All three are
//! computed once, when the record is built.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use meridian_core::{MeridianResult, MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

use crate::{canonical_id, OffsetCache, ZoneRules};

/// A constant displacement from UTC, in -18:00..=+18:00
///
/// Negative offsets are west of Greenwich, positive offsets east.
/// Equality, ordering and hashing look at the total seconds only.
#[derive(Clone)]
pub struct ZoneOffset {
    inner: Arc<OffsetInner>,
}

pub(crate) struct OffsetInner {
    total_seconds: i32,
    id: String,
    rules: ZoneRules,
}

impl ZoneOffset {
    /// Build a fresh offset. Callers validate `total_seconds` first.
    pub(crate) fn from_validated(total_seconds: i32) -> Self {
        // The rules point back at this record without owning it
        ZoneOffset {
            inner: Arc::new_cyclic(|owner| OffsetInner {
                total_seconds,
                id: canonical_id(total_seconds),
                rules: ZoneRules::fixed(total_seconds, owner.clone()),
            }),
        }
    }

    #[inline]
    pub(crate) fn from_inner(inner: Arc<OffsetInner>) -> Self {
        ZoneOffset { inner }
    }

    /// Offset of UTC itself, `Z`
    pub fn utc() -> ZoneOffset {
        OffsetCache::global().utc()
    }

    /// Smallest supported offset, `-18:00`
    pub fn min() -> ZoneOffset {
        OffsetCache::global().min()
    }

    /// Largest supported offset, `+18:00`
    pub fn max() -> ZoneOffset {
        OffsetCache::global().max()
    }

    pub fn of_hours(hours: i32) -> MeridianResult<ZoneOffset> {
        OffsetCache::global().of_hours(hours)
    }

    pub fn of_hours_minutes(hours: i32, minutes: i32) -> MeridianResult<ZoneOffset> {
        OffsetCache::global().of_hours_minutes(hours, minutes)
    }

    /// Minutes and seconds must carry the sign of the hours
    pub fn of_hours_minutes_seconds(
        hours: i32,
        minutes: i32,
        seconds: i32,
    ) -> MeridianResult<ZoneOffset> {
        OffsetCache::global().of_hours_minutes_seconds(hours, minutes, seconds)
    }

    pub fn of_total_minutes(total_minutes: i32) -> MeridianResult<ZoneOffset> {
        OffsetCache::global().of_total_minutes(total_minutes)
    }

    /// Offsets on a 15-minute boundary come back as the shared canonical
    /// instance; any other offset is built fresh.
    pub fn of_total_seconds(total_seconds: i32) -> MeridianResult<ZoneOffset> {
        OffsetCache::global().of_total_seconds(total_seconds)
    }

    #[inline]
    pub fn total_seconds(&self) -> i32 {
        self.inner.total_seconds
    }

    /// Canonical id, e.g. `Z`, `+02:30` or `-01:01:01`
    #[inline]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    #[inline]
    pub fn rules(&self) -> &ZoneRules {
        &self.inner.rules
    }

    /// Whole hours, carrying the sign of the offset
    #[inline]
    pub fn hours(&self) -> i32 {
        self.total_seconds() / SECONDS_PER_HOUR
    }

    /// Minutes within the hour, carrying the sign of the offset
    #[inline]
    pub fn minutes(&self) -> i32 {
        (self.total_seconds() / SECONDS_PER_MINUTE) % MINUTES_PER_HOUR
    }

    /// Seconds within the minute, carrying the sign of the offset
    #[inline]
    pub fn seconds(&self) -> i32 {
        self.total_seconds() % SECONDS_PER_MINUTE
    }

    #[inline]
    pub fn is_utc(&self) -> bool {
        self.total_seconds() == 0
    }

    /// True when both handles point at the same stored offset
    #[inline]
    pub fn same_instance(a: &ZoneOffset, b: &ZoneOffset) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl PartialEq for ZoneOffset {
    fn eq(&self, other: &Self) -> bool {
        ZoneOffset::same_instance(self, other) || self.total_seconds() == other.total_seconds()
    }
}

impl Eq for ZoneOffset {}

impl Hash for ZoneOffset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds().hash(state);
    }
}

impl PartialOrd for ZoneOffset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZoneOffset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneOffset({})", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::{MeridianError, OffsetError};
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(offset: &ZoneOffset) -> u64 {
        let mut hasher = DefaultHasher::new();
        offset.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_canonical_ids() {
        assert_eq!(ZoneOffset::of_total_seconds(0).unwrap().id(), "Z");
        assert_eq!(ZoneOffset::of_total_seconds(9000).unwrap().id(), "+02:30");
        assert_eq!(ZoneOffset::of_total_seconds(-3661).unwrap().id(), "-01:01:01");
    }

    #[test]
    fn test_components_to_total_seconds() {
        let offset = ZoneOffset::of_hours_minutes_seconds(2, 30, 0).unwrap();
        assert_eq!(offset.total_seconds(), 9000);
        assert_eq!(ZoneOffset::of_hours(-5).unwrap().total_seconds(), -18_000);
        assert_eq!(ZoneOffset::of_hours_minutes(-3, -30).unwrap().total_seconds(), -12_600);
        assert_eq!(ZoneOffset::of_total_minutes(345).unwrap().id(), "+05:45");
    }

    #[test]
    fn test_invalid_components_rejected() {
        assert_eq!(
            ZoneOffset::of_hours_minutes_seconds(1, -1, 0),
            Err(MeridianError::InvalidOffset(OffsetError::ExpectedPositive {
                hours: 1,
                minutes: -1,
                seconds: 0,
            }))
        );
        assert_eq!(
            ZoneOffset::of_hours_minutes_seconds(18, 0, 1),
            Err(MeridianError::InvalidOffset(OffsetError::BeyondLimit {
                hours: 18,
                minutes: 0,
                seconds: 1,
            }))
        );
        assert!(ZoneOffset::of_hours_minutes_seconds(0, 1, -1).is_err());
        assert!(ZoneOffset::of_hours_minutes_seconds(0, -1, 1).is_err());
        assert!(ZoneOffset::of_hours(19).is_err());
    }

    #[test]
    fn test_total_minutes_out_of_range() {
        assert_eq!(
            ZoneOffset::of_total_minutes(1081),
            Err(MeridianError::InvalidOffset(OffsetError::TotalSecondsOutOfRange(64_860)))
        );
        assert_eq!(
            ZoneOffset::of_total_minutes(i32::MAX),
            Err(MeridianError::InvalidOffset(OffsetError::TotalMinutesOutOfRange(i32::MAX)))
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(ZoneOffset::utc().id(), "Z");
        assert!(ZoneOffset::utc().is_utc());
        assert_eq!(ZoneOffset::min().total_seconds(), -64_800);
        assert_eq!(ZoneOffset::max().total_seconds(), 64_800);
        assert_eq!(ZoneOffset::min().id(), "-18:00");
        assert_eq!(ZoneOffset::max().id(), "+18:00");
        assert!(ZoneOffset::same_instance(
            &ZoneOffset::utc(),
            &ZoneOffset::of_total_seconds(0).unwrap()
        ));
    }

    #[test]
    fn test_signed_components() {
        let offset = ZoneOffset::of_total_seconds(-3661).unwrap();
        assert_eq!((offset.hours(), offset.minutes(), offset.seconds()), (-1, -1, -1));

        let offset = ZoneOffset::of_hours_minutes_seconds(5, 45, 30).unwrap();
        assert_eq!((offset.hours(), offset.minutes(), offset.seconds()), (5, 45, 30));
    }

    #[test]
    fn test_equality_is_by_value() {
        // Not 15-minute aligned, so each call builds a new record
        let a = ZoneOffset::of_total_seconds(3661).unwrap();
        let b = ZoneOffset::of_total_seconds(3661).unwrap();
        assert!(!ZoneOffset::same_instance(&a, &b));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, ZoneOffset::of_total_seconds(3662).unwrap());
    }

    #[test]
    fn test_aligned_offsets_share_storage() {
        let a = ZoneOffset::of_total_seconds(19_800).unwrap();
        let b = ZoneOffset::of_hours_minutes(5, 30).unwrap();
        assert!(ZoneOffset::same_instance(&a, &b));
    }

    #[test]
    fn test_ordering_west_to_east() {
        let mut offsets = vec![
            ZoneOffset::of_hours(3).unwrap(),
            ZoneOffset::utc(),
            ZoneOffset::of_hours(-8).unwrap(),
            ZoneOffset::max(),
            ZoneOffset::min(),
        ];
        offsets.sort();
        let ids: Vec<&str> = offsets.iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["-18:00", "-08:00", "Z", "+03:00", "+18:00"]);
    }

    #[test]
    fn test_display_and_debug() {
        let offset = ZoneOffset::of_hours_minutes(9, 30).unwrap();
        assert_eq!(offset.to_string(), "+09:30");
        assert_eq!(format!("{:?}", offset), "ZoneOffset(+09:30)");
    }

    #[test]
    fn test_usable_as_set_key() {
        let set: HashSet<ZoneOffset> = [0, 3600, 3600, 3661, 3661, -3600]
            .into_iter()
            .map(|ts| ZoneOffset::of_total_seconds(ts).unwrap())
            .collect();
        assert_eq!(set.len(), 4);
    }

    mod props {
        use super::*;
        use crate::MAX_SECONDS;
        use meridian_core::{Instant, LocalDateTime};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn total_seconds_preserved(ts in -MAX_SECONDS..=MAX_SECONDS) {
                prop_assert_eq!(ZoneOffset::of_total_seconds(ts).unwrap().total_seconds(), ts);
            }

            #[test]
            fn out_of_range_rejected(ts in prop_oneof![i32::MIN..-MAX_SECONDS, (MAX_SECONDS + 1)..=i32::MAX]) {
                prop_assert_eq!(
                    ZoneOffset::of_total_seconds(ts),
                    Err(MeridianError::InvalidOffset(OffsetError::TotalSecondsOutOfRange(ts)))
                );
            }

            #[test]
            fn aligned_offsets_are_stable(quarters in -72i32..=72) {
                let ts = quarters * 900;
                let a = ZoneOffset::of_total_seconds(ts).unwrap();
                let b = ZoneOffset::of_total_seconds(ts).unwrap();
                prop_assert_eq!(&a, &b);
                prop_assert!(ZoneOffset::same_instance(&a, &b));
            }

            #[test]
            fn equality_matches_seconds(
                ts1 in -MAX_SECONDS..=MAX_SECONDS,
                ts2 in -MAX_SECONDS..=MAX_SECONDS,
            ) {
                let a = ZoneOffset::of_total_seconds(ts1).unwrap();
                let b = ZoneOffset::of_total_seconds(ts2).unwrap();
                prop_assert_eq!(a == b, ts1 == ts2);
                if a == b {
                    prop_assert_eq!(hash_of(&a), hash_of(&b));
                }
            }

            #[test]
            fn components_agree_with_total(h in -17i32..=17, m in 0i32..60, s in 0i32..60) {
                let (m, s) = if h < 0 { (-m, -s) } else { (m, s) };
                let offset = ZoneOffset::of_hours_minutes_seconds(h, m, s).unwrap();
                prop_assert_eq!(offset.total_seconds(), h * 3600 + m * 60 + s);
                prop_assert_eq!((offset.hours(), offset.minutes(), offset.seconds()), (h, m, s));
            }

            #[test]
            fn rules_are_constant(
                ts in -MAX_SECONDS..=MAX_SECONDS,
                epoch_second in any::<i64>(),
                hour in 0u8..24,
            ) {
                let offset = ZoneOffset::of_total_seconds(ts).unwrap();
                let instant = Instant::from_epoch_second(epoch_second);
                let local = LocalDateTime::of(2000, 1, 1, hour, 0, 0).unwrap();
                prop_assert_eq!(offset.rules().offset_at_instant(&instant).total_seconds(), ts);
                prop_assert_eq!(offset.rules().offset_at_local(&local).total_seconds(), ts);
            }
        }
    }
}
