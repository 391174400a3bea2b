// SPDX-License-Identifier: Apache-2.0

//! Pure predicates applied while walking a remote feed.
//!
//! Two decisions are made for every item: whether it falls before the
//! trailing window (which ends the walk) and whether its labels intersect
//! a configured allow-list. Neither touches the network or the clock.

use chrono::{DateTime, Days, Utc};

/// A trailing time window anchored at a fixed instant.
///
/// The cutoff is computed once with calendar-day subtraction, so every item
/// of a run is judged against the same boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    cutoff: DateTime<Utc>,
}

impl Window {
    /// Builds the window covering the `days_back` calendar days before `now`.
    ///
    /// A zero or negative `days_back` puts the cutoff at or after `now`, so
    /// practically every item stops the walk immediately.
    #[must_use]
    pub fn trailing_days(now: DateTime<Utc>, days_back: i64) -> Self {
        let days = Days::new(days_back.unsigned_abs());
        let cutoff = if days_back >= 0 {
            now.checked_sub_days(days).unwrap_or(DateTime::<Utc>::MIN_UTC)
        } else {
            now.checked_add_days(days).unwrap_or(DateTime::<Utc>::MAX_UTC)
        };
        Self { cutoff }
    }

    /// The earliest instant still inside the window.
    #[must_use]
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff
    }

    /// Returns true when `timestamp` is strictly before the cutoff.
    ///
    /// An item exactly on the cutoff is still inside the window.
    #[must_use]
    pub fn should_stop(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp < self.cutoff
    }
}

/// Window check in one call: is `timestamp` older than `days_back` days before `now`?
#[must_use]
pub fn should_stop(timestamp: DateTime<Utc>, now: DateTime<Utc>, days_back: i64) -> bool {
    Window::trailing_days(now, days_back).should_stop(timestamp)
}

/// Returns true when any of `labels` equals any entry of `allow_list`.
///
/// Comparison is exact and case-sensitive. An item without labels never
/// matches, even against an empty allow-list.
#[must_use]
pub fn labels_match<S: AsRef<str>>(labels: &[S], allow_list: &[String]) -> bool {
    if labels.is_empty() {
        return false;
    }
    labels
        .iter()
        .any(|label| allow_list.iter().any(|allowed| allowed == label.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cutoff_is_calendar_days_back() {
        let window = Window::trailing_days(now(), 7);
        assert_eq!(
            window.cutoff(),
            Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_boundary_is_exclusive_on_the_before_side() {
        let window = Window::trailing_days(now(), 7);
        let cutoff = window.cutoff();

        assert!(!window.should_stop(cutoff));
        assert!(!window.should_stop(cutoff + Duration::seconds(1)));
        assert!(window.should_stop(cutoff - Duration::seconds(1)));
    }

    #[test]
    fn test_recent_items_continue() {
        assert!(!should_stop(now(), now(), 7));
        assert!(!should_stop(now() - Duration::days(3), now(), 7));
    }

    #[test]
    fn test_old_items_stop() {
        assert!(should_stop(now() - Duration::days(10), now(), 7));
    }

    #[test]
    fn test_zero_days_stops_anything_in_the_past() {
        assert!(should_stop(now() - Duration::seconds(1), now(), 0));
        assert!(!should_stop(now(), now(), 0));
    }

    #[test]
    fn test_negative_days_put_cutoff_in_the_future() {
        let window = Window::trailing_days(now(), -2);
        assert!(window.cutoff() > now());
        assert!(window.should_stop(now()));
    }

    #[test]
    fn test_huge_window_saturates() {
        let window = Window::trailing_days(now(), i64::MAX);
        assert_eq!(window.cutoff(), DateTime::<Utc>::MIN_UTC);
        assert!(!window.should_stop(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_empty_labels_never_match() {
        let none: [&str; 0] = [];
        assert!(!labels_match(&none, &[]));
        assert!(!labels_match(&none, &["good first issue".to_string()]));
    }

    #[test]
    fn test_labels_match_on_any_intersection() {
        let allow = vec!["help wanted".to_string(), "good first issue".to_string()];
        assert!(labels_match(&["bug", "good first issue"], &allow));
        assert!(labels_match(&["help wanted"], &allow));
        assert!(!labels_match(&["bug", "docs"], &allow));
    }

    #[test]
    fn test_labels_match_is_case_sensitive() {
        let allow = vec!["Good First Issue".to_string()];
        assert!(!labels_match(&["good first issue"], &allow));
    }

    #[test]
    fn test_labels_match_against_empty_allow_list() {
        assert!(!labels_match(&["bug"], &[]));
    }

    #[test]
    fn test_labels_match_is_order_independent() {
        let allow = vec!["a".to_string(), "b".to_string()];
        assert!(labels_match(&["x", "b"], &allow));
        assert!(labels_match(&["b", "x"], &allow));
    }
}
