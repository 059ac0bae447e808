//! Current-analysis slot
//!
//! Exactly one analysis is "current" at a time. Re-triggering acquisition
//! starts an independent run; if runs overlap, only the most recently
//! *initiated* run may publish its result. There is no cancellation — a
//! stale run completes and is discarded.

use crate::report::AnalysisReport;

#[derive(Debug, Default)]
pub struct RecordSlot {
    latest_run: u64,
    current: Option<AnalysisReport>,
}

impl RecordSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new acquisition run and return its id. Calling this
    /// invalidates every earlier in-flight run.
    pub fn begin_run(&mut self) -> u64 {
        self.latest_run += 1;
        self.latest_run
    }

    /// Publish a completed run. Returns false (and leaves the slot
    /// untouched) when a newer run has been initiated since `run` began.
    pub fn complete(&mut self, run: u64, report: AnalysisReport) -> bool {
        if run == self.latest_run {
            self.current = Some(report);
            true
        } else {
            log::debug!("discarding stale acquisition run {run}");
            false
        }
    }

    /// Publish a completed run and return the report its awaiter should
    /// observe. A run that is still the latest sees its own report; a stale
    /// run sees the newest published result instead, so when overlapping
    /// runs are both awaited the last-initiated run's report is the one
    /// every awaiter ends up holding. Before anything has been published a
    /// stale run falls back to its own report.
    pub fn resolve(&mut self, run: u64, report: AnalysisReport) -> AnalysisReport {
        if self.complete(run, report.clone()) {
            report
        } else {
            self.current.clone().unwrap_or(report)
        }
    }

    pub fn current(&self) -> Option<&AnalysisReport> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FingerprintRecord, Probed};
    use crate::report::AnalysisReport;

    fn report_with_touch(touch: u32) -> AnalysisReport {
        let mut record = FingerprintRecord::default();
        record.touch = Probed::Available(touch);
        AnalysisReport::from_record(record).unwrap()
    }

    #[test]
    fn empty_until_first_completion() {
        let mut slot = RecordSlot::new();
        assert!(slot.current().is_none());

        let run = slot.begin_run();
        assert!(slot.complete(run, report_with_touch(0)));
        assert!(slot.current().is_some());
    }

    #[test]
    fn completed_run_replaces_previous_result() {
        let mut slot = RecordSlot::new();

        let first = slot.begin_run();
        assert!(slot.complete(first, report_with_touch(1)));

        let second = slot.begin_run();
        assert!(slot.complete(second, report_with_touch(2)));

        let current = slot.current().unwrap();
        assert_eq!(current.fingerprint.touch, Probed::Available(2));
    }

    #[test]
    fn stale_run_cannot_overwrite_newer_result() {
        let mut slot = RecordSlot::new();

        // Two overlapping runs: the older one finishes last.
        let stale = slot.begin_run();
        let fresh = slot.begin_run();

        assert!(slot.complete(fresh, report_with_touch(2)));
        assert!(!slot.complete(stale, report_with_touch(1)));

        let current = slot.current().unwrap();
        assert_eq!(current.fingerprint.touch, Probed::Available(2));
    }

    #[test]
    fn stale_run_is_ignored_even_before_fresh_completes() {
        let mut slot = RecordSlot::new();

        let stale = slot.begin_run();
        let _fresh = slot.begin_run();

        // The newer run was initiated, so the older result is dropped even
        // though nothing has been published yet.
        assert!(!slot.complete(stale, report_with_touch(1)));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_run_resolves_with_the_newer_result() {
        let mut slot = RecordSlot::new();

        let stale = slot.begin_run();
        let fresh = slot.begin_run();

        let resolved = slot.resolve(fresh, report_with_touch(2));
        assert_eq!(resolved.fingerprint.touch, Probed::Available(2));

        // The older awaiter gets the newer published report, not its own,
        // so it can never render the stale result last.
        let resolved = slot.resolve(stale, report_with_touch(1));
        assert_eq!(resolved.fingerprint.touch, Probed::Available(2));

        let current = slot.current().unwrap();
        assert_eq!(current.fingerprint.touch, Probed::Available(2));
    }

    #[test]
    fn stale_run_resolves_with_its_own_report_before_any_publication() {
        let mut slot = RecordSlot::new();

        let stale = slot.begin_run();
        let _fresh = slot.begin_run();

        // Nothing published yet: the stale report is the best available,
        // but it still must not occupy the slot.
        let resolved = slot.resolve(stale, report_with_touch(1));
        assert_eq!(resolved.fingerprint.touch, Probed::Available(1));
        assert!(slot.current().is_none());
    }

    #[test]
    fn run_ids_are_monotonic() {
        let mut slot = RecordSlot::new();
        let a = slot.begin_run();
        let b = slot.begin_run();
        let c = slot.begin_run();
        assert!(a < b && b < c);
    }
}
