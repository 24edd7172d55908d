//! Whole-day booking ranges and the room overlap rule.
//!
//! A `BookingRange` always spans complete UTC days: `start` sits at
//! 00:00:00.000 and `end` at 23:59:59.999, with `start <= end`. Two ranges
//! conflict when they share at least one calendar day.

use chrono::{DateTime, Utc};

use crate::common::{end_of_day, start_of_day};

/// Why a proposed date range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeViolation {
    #[error("Start date must be today or in the future")]
    StartInPast,
    #[error("End date must be greater than or equal to start date")]
    EndBeforeStart,
}

/// Inclusive, day-aligned date range occupied by a showtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl BookingRange {
    /// Normalize raw bounds to whole days and check their ordering.
    ///
    /// Normalization is idempotent, so already-normalized bounds (for example
    /// values read back from storage) pass through unchanged.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, RangeViolation> {
        let start = start_of_day(start);
        let end = end_of_day(end);
        if end < start {
            return Err(RangeViolation::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    /// Single-day range.
    pub fn day(at: DateTime<Utc>) -> Self {
        Self {
            start: start_of_day(at),
            end: end_of_day(at),
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end.date_naive() - self.start.date_naive()).num_days() + 1
    }

    /// Whether `self` (the candidate) collides with `existing`.
    ///
    /// The candidate conflicts when it starts inside `existing`, ends inside
    /// `existing`, or swallows `existing` whole. A candidate lying entirely
    /// inside `existing` is caught by the first clause, so the three clauses
    /// cover every shared-day arrangement.
    pub fn overlaps(&self, existing: &BookingRange) -> bool {
        let starts_inside = existing.start <= self.start && self.start <= existing.end;
        let ends_inside = existing.start <= self.end && self.end <= existing.end;
        let contains_existing = self.start <= existing.start && existing.end <= self.end;
        starts_inside || ends_inside || contains_existing
    }
}

/// Reject a start day earlier than the day containing `now`.
pub fn require_not_past(start: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), RangeViolation> {
    if start_of_day(start) < start_of_day(now) {
        return Err(RangeViolation::StartInPast);
    }
    Ok(())
}
