//! Zone identifier capability

use std::fmt;

use meridian_core::Instant;

use crate::{ZoneOffset, ZoneRules};

/// Anything that names a time zone and can resolve its rules
pub trait ZoneId: fmt::Display {
    /// Stable textual id of the zone
    fn id(&self) -> &str;

    /// Rules used to resolve offsets for this zone
    fn rules(&self) -> ZoneRules;

    /// The equivalent fixed offset, when the rules never change
    fn normalized(&self) -> Option<ZoneOffset> {
        let rules = self.rules();
        if rules.is_fixed_offset() {
            Some(rules.offset_at_instant(&Instant::EPOCH))
        } else {
            None
        }
    }
}

impl ZoneId for ZoneOffset {
    fn id(&self) -> &str {
        ZoneOffset::id(self)
    }

    fn rules(&self) -> ZoneRules {
        ZoneOffset::rules(self).clone()
    }

    fn normalized(&self) -> Option<ZoneOffset> {
        Some(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(zone: &dyn ZoneId) -> String {
        format!("{} -> {}", zone.id(), zone.rules())
    }

    #[test]
    fn test_offset_as_zone_id() {
        let offset = ZoneOffset::of_hours_minutes(-9, -30).unwrap();
        assert_eq!(describe(&offset), "-09:30 -> FixedRules:-09:30");
    }

    #[test]
    fn test_normalized_keeps_instance() {
        let offset = ZoneOffset::of_hours(1).unwrap();
        let zone: Box<dyn ZoneId> = Box::new(offset.clone());
        let normalized = zone.normalized().unwrap();
        assert!(ZoneOffset::same_instance(&normalized, &offset));
    }
}
