//! Rental date range and submission outcome.
//!
//! This module holds the two pieces of booking state the widget owns: the
//! ordered pair of rental dates and the result of the most recent submission
//! attempt. The date range enforces its ordering invariant internally, so the
//! rest of the plugin never observes an inverted or out-of-bounds range.

use chrono::NaiveDate;

/// An ordered pair of rental dates with a fixed lower bound.
///
/// Invariant: `minimum <= start <= end` at all times. The fields are private
/// and mutated only through [`set_start`](Self::set_start) and
/// [`set_end`](Self::set_end), which clamp rather than reject out-of-bounds
/// input, so the range can never be constructed or driven into an invalid
/// state.
///
/// The lower bound is the "today" the widget was opened with; the hosting
/// date pickers should not offer earlier dates, but the range defends
/// against them anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    minimum: NaiveDate,
}

impl DateRange {
    /// Creates a single-day range anchored on `today`.
    ///
    /// Both endpoints start as `today`, which is also the permanent lower
    /// bound for the start date.
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: today,
            minimum: today,
        }
    }

    /// First rental day.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last rental day. Always `>= start()`.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Lower bound for the start date.
    #[must_use]
    pub fn minimum(&self) -> NaiveDate {
        self.minimum
    }

    /// Moves the start date, keeping the range valid.
    ///
    /// Values below the lower bound are clamped up to it. If the new start
    /// lands after the current end, the end is dragged forward to match,
    /// closing a range that would otherwise become inverted. The range only
    /// ever collapses forward: moving the start earlier never touches the
    /// end.
    pub fn set_start(&mut self, new_start: NaiveDate) {
        let clamped = new_start.max(self.minimum);
        if clamped > self.end {
            self.end = clamped;
        }
        self.start = clamped;
    }

    /// Moves the end date, keeping the range valid.
    ///
    /// Values before the current start are clamped up to the start.
    pub fn set_end(&mut self, new_end: NaiveDate) {
        self.end = new_end.max(self.start);
    }
}

/// Which way a submission attempt turned out.
///
/// Lifecycle: starts as `Pending`; resolves to `Confirmed` or `Failed` when
/// the rent response arrives. `Failed` is non-terminal (another submission
/// resets it to `Pending`), while `Confirmed` is sticky for the lifetime of
/// the plugin instance: once the booking exists, the pane shows the
/// confirmation view until it is reloaded for another bike.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No submission has resolved yet (initial state, or one is in flight).
    Pending,
    /// The booking was accepted; carries the final priced breakdown.
    Confirmed(crate::domain::Quote),
    /// The booking was rejected or the request failed.
    Failed(ErrorKind),
}

impl SubmitOutcome {
    /// Whether the booking has been accepted.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }
}

/// The two user-visible failure categories for a submission.
///
/// Everything the booking API can do wrong is folded into these two cases at
/// the network boundary; no other error shape reaches the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested date range conflicts with an existing booking.
    BikeUnavailable,
    /// Any other failure: transport error, unexpected status, malformed or
    /// unrecognized error body.
    ServerError,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).expect("valid test date")
    }

    #[test]
    fn starts_as_single_day_range() {
        let range = DateRange::starting(day(10));
        assert_eq!(range.start(), day(10));
        assert_eq!(range.end(), day(10));
    }

    #[test]
    fn start_moved_past_end_drags_end_forward() {
        let mut range = DateRange::starting(day(10));
        range.set_start(day(12));
        assert_eq!(range.start(), day(12));
        assert_eq!(range.end(), day(12));
    }

    #[test]
    fn start_moved_back_keeps_end() {
        let mut range = DateRange::starting(day(10));
        range.set_end(day(15));
        range.set_start(day(12));
        assert_eq!(range.start(), day(12));
        assert_eq!(range.end(), day(15));
    }

    #[test]
    fn start_clamps_to_minimum() {
        let mut range = DateRange::starting(day(10));
        range.set_start(day(5));
        assert_eq!(range.start(), day(10));
        assert_eq!(range.end(), day(10));
    }

    #[test]
    fn end_clamps_to_start() {
        let mut range = DateRange::starting(day(10));
        range.set_start(day(12));
        range.set_end(day(11));
        assert_eq!(range.end(), day(12));
    }

    #[test]
    fn end_can_extend_freely() {
        let mut range = DateRange::starting(day(10));
        range.set_end(day(20));
        assert_eq!(range.start(), day(10));
        assert_eq!(range.end(), day(20));
    }
}
