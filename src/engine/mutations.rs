use tracing::info;

use crate::model::{Booking, BookingFilter, BookingId, BookingPatch, DateRange, PersonId, RoomId};

use super::conflict::{find_conflict, validate_range};
use super::{Engine, EngineError};

impl Engine {
    /// Register a new booking. Fails on incoherent dates, a duplicate of an
    /// existing booking, or a room/date collision anywhere in the store.
    /// New bookings start not checked in.
    pub fn add_booking(
        &mut self,
        room_id: RoomId,
        person_id: PersonId,
        range: DateRange,
    ) -> Result<Booking, EngineError> {
        validate_range(&range)?;
        // Probe id 0 never collides with stored ids; allocation starts at 1.
        let probe = Booking {
            id: 0,
            room_id,
            person_id,
            range,
            active: false,
        };
        if self.store.contains_duplicate(&probe) {
            return Err(EngineError::Duplicate);
        }
        if find_conflict(&probe, self.store.iter()).is_some() {
            return Err(EngineError::Conflict);
        }

        let booking = Booking {
            id: self.store.allocate_id(),
            ..probe
        };
        self.store.insert(booking);
        self.filter = BookingFilter::All;
        info!(id = booking.id, room = room_id, "booking added");
        Ok(booking)
    }

    /// Apply a sparse edit to the booking with `id`.
    ///
    /// Check order is fixed: resolve, date validation, duplicate, conflict.
    /// The conflict scan runs over the currently visible bookings and does
    /// not exclude the pre-edit target; an unchanged candidate skips both
    /// scans via the self-equality guard.
    pub fn edit_booking(
        &mut self,
        id: BookingId,
        patch: BookingPatch,
    ) -> Result<Booking, EngineError> {
        let target = *self.store.get(id).ok_or(EngineError::NotFound(id))?;
        let candidate = patch.apply_to(&target);
        validate_range(&candidate.range)?;

        let changed = !candidate.is_duplicate_of(&target);
        if changed && self.store.contains_duplicate(&candidate) {
            return Err(EngineError::Duplicate);
        }
        if changed && find_conflict(&candidate, self.filtered()).is_some() {
            return Err(EngineError::Conflict);
        }

        let replaced = self.store.replace(id, candidate);
        debug_assert!(replaced.is_some());
        self.filter = BookingFilter::All;
        info!(id, "booking edited");
        Ok(candidate)
    }

    pub fn delete_booking(&mut self, id: BookingId) -> Result<Booking, EngineError> {
        let removed = self.store.remove(id).ok_or(EngineError::NotFound(id))?;
        self.filter = BookingFilter::All;
        info!(id, "booking deleted");
        Ok(removed)
    }

    pub fn check_in(&mut self, id: BookingId) -> Result<Booking, EngineError> {
        let target = *self.store.get(id).ok_or(EngineError::NotFound(id))?;
        if target.active {
            return Err(EngineError::AlreadyCheckedIn(id));
        }
        let updated = Booking {
            active: true,
            ..target
        };
        self.store.replace(id, updated);
        self.filter = BookingFilter::All;
        info!(id, "checked in");
        Ok(updated)
    }

    pub fn check_out(&mut self, id: BookingId) -> Result<Booking, EngineError> {
        let target = *self.store.get(id).ok_or(EngineError::NotFound(id))?;
        if !target.active {
            return Err(EngineError::NotCheckedIn(id));
        }
        let updated = Booking {
            active: false,
            ..target
        };
        self.store.replace(id, updated);
        self.filter = BookingFilter::All;
        info!(id, "checked out");
        Ok(updated)
    }

    /// Drop every booking and reset the view. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.store.len();
        self.store.clear();
        self.filter = BookingFilter::All;
        info!(count = n, "bookings cleared");
        n
    }
}
