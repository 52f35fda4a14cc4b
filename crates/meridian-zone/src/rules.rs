//! Constant zone rules
//!
//! A fixed offset has no transitions and no daylight saving, so every rule
//! query answers with the same offset.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Weak;
use std::time::Duration;

use meridian_core::{Instant, LocalDateTime};

use crate::offset::OffsetInner;
use crate::{canonical_id, ZoneOffset};

/// Rules that resolve every instant and local date-time to one offset
///
/// Queries hand back the offset these rules were built for, sharing its
/// storage. Equality and hashing look at the fixed value only.
#[derive(Clone)]
pub struct ZoneRules {
    offset_seconds: i32,
    owner: Weak<OffsetInner>,
}

impl ZoneRules {
    /// Rules that always answer with `offset`
    #[inline]
    pub fn of(offset: &ZoneOffset) -> Self {
        offset.rules().clone()
    }

    /// `total_seconds` must already be validated
    #[inline]
    pub(crate) fn fixed(total_seconds: i32, owner: Weak<OffsetInner>) -> Self {
        ZoneRules { offset_seconds: total_seconds, owner }
    }

    /// The offset every query resolves to, in seconds
    #[inline]
    pub fn total_seconds(&self) -> i32 {
        self.offset_seconds
    }

    fn offset(&self) -> ZoneOffset {
        match self.owner.upgrade() {
            Some(inner) => ZoneOffset::from_inner(inner),
            // Rules outlived every handle to their offset
            None => ZoneOffset::from_validated(self.offset_seconds),
        }
    }

    pub fn is_fixed_offset(&self) -> bool {
        true
    }

    pub fn offset_at_instant(&self, _instant: &Instant) -> ZoneOffset {
        self.offset()
    }

    pub fn offset_at_local(&self, _local: &LocalDateTime) -> ZoneOffset {
        self.offset()
    }

    /// Offsets valid for a local date-time. There are no gaps or overlaps,
    /// so this always holds exactly one entry.
    pub fn valid_offsets(&self, local: &LocalDateTime) -> Vec<ZoneOffset> {
        vec![self.offset_at_local(local)]
    }

    pub fn is_valid_offset(&self, _local: &LocalDateTime, offset: &ZoneOffset) -> bool {
        offset.total_seconds() == self.offset_seconds
    }

    pub fn standard_offset(&self, _instant: &Instant) -> ZoneOffset {
        self.offset()
    }

    pub fn daylight_savings(&self, _instant: &Instant) -> Duration {
        Duration::ZERO
    }

    pub fn is_daylight_savings(&self, _instant: &Instant) -> bool {
        false
    }

    pub fn next_transition(&self, _instant: &Instant) -> Option<Instant> {
        None
    }

    pub fn previous_transition(&self, _instant: &Instant) -> Option<Instant> {
        None
    }
}

impl PartialEq for ZoneRules {
    fn eq(&self, other: &Self) -> bool {
        self.offset_seconds == other.offset_seconds
    }
}

impl Eq for ZoneRules {}

impl Hash for ZoneRules {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset_seconds.hash(state);
    }
}

impl fmt::Debug for ZoneRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneRules({})", self)
    }
}

impl fmt::Display for ZoneRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedRules:{}", canonical_id(self.offset_seconds))
    }
}
