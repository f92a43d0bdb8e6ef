//! Uptime milestone detection
//!
//! A single watermark records the largest threshold already reported.
//! Crossings are reported one per call, lowest first, so a frequently
//! ticking caller catches up in ascending order after a long suspension.

use crate::core::format::format_session_duration;

/// A fixed elapsed-time threshold worth notifying the user about once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Milestone {
    pub(crate) label: &'static str,
    pub(crate) threshold: i64,
}

/// Ordered ascending; the scan in `check` relies on this.
pub(crate) const MILESTONES: [Milestone; 6] = [
    Milestone { label: "1 day", threshold: 86_400 },
    Milestone { label: "1 week", threshold: 604_800 },
    Milestone { label: "1 month", threshold: 2_592_000 },
    Milestone { label: "3 months", threshold: 7_776_000 },
    Milestone { label: "6 months", threshold: 15_552_000 },
    Milestone { label: "1 year", threshold: 31_536_000 },
];

#[derive(Debug, Default)]
pub(crate) struct MilestoneTracker {
    watermark: i64,
}

impl MilestoneTracker {
    pub(crate) fn new(watermark: i64) -> Self {
        MilestoneTracker { watermark }
    }

    pub(crate) fn watermark(&self) -> i64 {
        self.watermark
    }

    /// Report the lowest milestone newly crossed by `elapsed`, if any, and
    /// raise the watermark to it. At most one crossing per call.
    pub(crate) fn check(&mut self, elapsed: f64) -> Option<&'static Milestone> {
        for milestone in &MILESTONES {
            if elapsed >= milestone.threshold as f64 && self.watermark < milestone.threshold {
                self.watermark = milestone.threshold;
                return Some(milestone);
            }
        }
        None
    }
}

impl Milestone {
    pub(crate) fn formatted_threshold(&self) -> String {
        format_session_duration(self.threshold as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_day_crossing_reported_once() {
        let mut tracker = MilestoneTracker::default();
        let crossed = tracker.check(86_400.0).expect("1 day crossing");
        assert_eq!(crossed.label, "1 day");
        assert_eq!(tracker.watermark(), 86_400);
        assert!(tracker.check(86_400.0).is_none());
    }

    #[test]
    fn below_first_threshold_reports_nothing() {
        let mut tracker = MilestoneTracker::default();
        assert!(tracker.check(86_399.0).is_none());
        assert_eq!(tracker.watermark(), 0);
    }

    #[test]
    fn multiple_crossings_collapse_to_lowest_per_call() {
        // Process suspended across two thresholds; they drain one per call.
        let mut tracker = MilestoneTracker::default();
        let elapsed = 700_000.0; // past 1 day and 1 week
        assert_eq!(tracker.check(elapsed).unwrap().label, "1 day");
        assert_eq!(tracker.check(elapsed).unwrap().label, "1 week");
        assert!(tracker.check(elapsed).is_none());
    }

    #[test]
    fn watermark_never_decreases() {
        let mut tracker = MilestoneTracker::default();
        tracker.check(700_000.0);
        tracker.check(700_000.0);
        let high = tracker.watermark();
        tracker.check(100.0);
        assert_eq!(tracker.watermark(), high);
    }

    #[test]
    fn restored_watermark_skips_reported_milestones() {
        let mut tracker = MilestoneTracker::new(604_800);
        assert!(tracker.check(604_800.0).is_none());
        assert_eq!(tracker.check(2_592_000.0).unwrap().label, "1 month");
    }

    #[test]
    fn thresholds_are_ascending() {
        for pair in MILESTONES.windows(2) {
            assert!(pair[0].threshold < pair[1].threshold);
        }
    }
}
