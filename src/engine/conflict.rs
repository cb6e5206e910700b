use chrono::Datelike;

use crate::limits::*;
use crate::model::{Booking, DateRange};

use super::EngineError;

/// Reject incoherent or out-of-bounds stay ranges before any duplicate or
/// conflict check runs.
pub(crate) fn validate_range(range: &DateRange) -> Result<(), EngineError> {
    if range.start > range.end {
        return Err(EngineError::InvalidDates("start date is after end date"));
    }
    if range.start.year() < MIN_BOOKING_YEAR || range.end.year() > MAX_BOOKING_YEAR {
        return Err(EngineError::InvalidDates("date out of range"));
    }
    if range.nights() > MAX_STAY_NIGHTS {
        return Err(EngineError::InvalidDates("stay too long"));
    }
    Ok(())
}

/// First booking in `others` the candidate collides with, if any.
/// The caller chooses the scan set; nothing is excluded here.
pub(crate) fn find_conflict<'a, I>(candidate: &Booking, others: I) -> Option<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    others.into_iter().find(|other| candidate.conflicts_with(other))
}
