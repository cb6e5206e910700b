use crate::model::{Booking, BookingFilter};

use super::Engine;

impl Engine {
    /// Reset the view to checked-in bookings and report how many there are.
    pub fn list_bookings(&mut self) -> usize {
        self.filter = BookingFilter::Active;
        self.filtered().count()
    }

    /// Narrow the view to a room or person selection; reports the match count.
    pub fn find_bookings(&mut self, filter: BookingFilter) -> usize {
        self.filter = filter;
        self.filtered().count()
    }

    /// Visible bookings as a snapshot, in id order.
    pub fn filtered_snapshot(&self) -> Vec<Booking> {
        self.filtered().copied().collect()
    }
}
