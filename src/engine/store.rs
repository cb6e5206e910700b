use crate::model::{Booking, BookingId};

/// Canonical set of bookings, kept sorted by id. Working sets are small:
/// lookups are binary search, everything else is a linear scan.
#[derive(Debug)]
pub struct BookingStore {
    bookings: Vec<Booking>,
    next_id: BookingId,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
        }
    }

    /// Hand out the next booking id. Ids are never reused, deletes included.
    pub fn allocate_id(&mut self) -> BookingId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn contains_id(&self, id: BookingId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: BookingId) -> Option<&Booking> {
        self.index_of(id).map(|pos| &self.bookings[pos])
    }

    /// True iff some stored booking has the same observable fields.
    pub fn contains_duplicate(&self, booking: &Booking) -> bool {
        self.bookings.iter().any(|b| b.is_duplicate_of(booking))
    }

    /// Insert maintaining id order. The id must not already be present.
    pub fn insert(&mut self, booking: Booking) {
        let pos = self
            .bookings
            .binary_search_by_key(&booking.id, |b| b.id)
            .unwrap_or_else(|e| e);
        self.bookings.insert(pos, booking);
        // Keep the allocator ahead of manually inserted ids.
        if booking.id >= self.next_id {
            self.next_id = booking.id + 1;
        }
    }

    /// Replace the booking with `id` in one step. Returns the previous value.
    pub fn replace(&mut self, id: BookingId, booking: Booking) -> Option<Booking> {
        debug_assert_eq!(id, booking.id);
        let pos = self.index_of(id)?;
        Some(std::mem::replace(&mut self.bookings[pos], booking))
    }

    pub fn remove(&mut self, id: BookingId) -> Option<Booking> {
        let pos = self.index_of(id)?;
        Some(self.bookings.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn clear(&mut self) {
        self.bookings.clear();
    }

    fn index_of(&self, id: BookingId) -> Option<usize> {
        self.bookings.binary_search_by_key(&id, |b| b.id).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateRange;
    use chrono::NaiveDate;

    fn booking(id: BookingId) -> Booking {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        Booking {
            id,
            room_id: 101,
            person_id: 5,
            range: DateRange::new(start, end),
            active: false,
        }
    }

    #[test]
    fn insert_keeps_id_order() {
        let mut store = BookingStore::new();
        store.insert(booking(3));
        store.insert(booking(1));
        store.insert(booking(2));
        let ids: Vec<_> = store.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn allocator_skips_manual_ids() {
        let mut store = BookingStore::new();
        store.insert(booking(7));
        assert_eq!(store.allocate_id(), 8);
    }

    #[test]
    fn replace_swaps_in_place() {
        let mut store = BookingStore::new();
        store.insert(booking(1));
        let updated = Booking {
            room_id: 202,
            ..booking(1)
        };
        let old = store.replace(1, updated).unwrap();
        assert_eq!(old.room_id, 101);
        assert_eq!(store.get(1).unwrap().room_id, 202);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_missing_returns_none() {
        let mut store = BookingStore::new();
        assert!(store.replace(9, booking(9)).is_none());
    }

    #[test]
    fn remove_missing_returns_none() {
        let mut store = BookingStore::new();
        store.insert(booking(1));
        assert!(store.remove(2).is_none());
        assert_eq!(store.len(), 1);
    }
}
