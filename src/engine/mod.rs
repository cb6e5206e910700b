mod conflict;
mod error;
mod mutations;
mod queries;
mod store;

pub use error::EngineError;
pub use store::BookingStore;

use crate::model::{Booking, BookingFilter, BookingId};

/// The booking register: canonical store plus the current filtered view.
///
/// Commands run serially on the caller's thread; methods take `&mut self`.
/// Embedding in a concurrent service requires one mutual-exclusion section
/// per register around each call — the read-validate-write sequence inside
/// an operation is not atomic across steps.
pub struct Engine {
    store: BookingStore,
    filter: BookingFilter,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            store: BookingStore::new(),
            filter: BookingFilter::All,
        }
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.store.get(id)
    }

    pub fn has_booking_with_id(&self, id: BookingId) -> bool {
        self.store.contains_id(id)
    }

    /// All bookings, in id order, regardless of the current filter.
    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.store.iter()
    }

    pub fn booking_count(&self) -> usize {
        self.store.len()
    }

    pub fn filter(&self) -> BookingFilter {
        self.filter
    }

    /// Bookings visible under the current filter.
    pub fn filtered(&self) -> impl Iterator<Item = &Booking> {
        self.store.iter().filter(|b| self.filter.matches(b))
    }
}
