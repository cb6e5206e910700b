use chrono::NaiveDate;

/// Booking identifier — allocated by the store, never reused.
pub type BookingId = u32;

/// Room identifier. Room records live outside this core.
pub type RoomId = u32;

/// Person identifier. Person records live outside this core.
pub type PersonId = u32;

/// Stay interval `[start, end)` — the checkout day is not occupied, so a
/// stay ending on day D never collides with one starting on day D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A room reservation held by one person for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub person_id: PersonId,
    pub range: DateRange,
    /// Checked-in flag. Toggled only by check-in/check-out, never by edits.
    pub active: bool,
}

impl Booking {
    /// Observable-field equality, ignoring `id`. Two bookings with the same
    /// room, person, dates and check-in state describe the same reservation.
    pub fn is_duplicate_of(&self, other: &Booking) -> bool {
        self.room_id == other.room_id
            && self.person_id == other.person_id
            && self.range == other.range
            && self.active == other.active
    }

    /// Same room with overlapping stay. Check-in state is irrelevant here:
    /// a reservation holds its room before the guest arrives.
    pub fn conflicts_with(&self, other: &Booking) -> bool {
        self.room_id == other.room_id && self.range.overlaps(&other.range)
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} room {} person {} {} [{}]",
            self.id,
            self.room_id,
            self.person_id,
            self.range,
            if self.active { "checked-in" } else { "reserved" }
        )
    }
}

/// Sparse edit: present fields override the booking's current values.
/// `id`, `person_id` and `active` are not editable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub room_id: Option<RoomId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BookingPatch {
    /// True iff at least one field is present.
    pub fn edits_anything(&self) -> bool {
        self.room_id.is_some() || self.start_date.is_some() || self.end_date.is_some()
    }

    /// The booking this patch would produce when applied to `target`.
    pub fn apply_to(&self, target: &Booking) -> Booking {
        Booking {
            id: target.id,
            room_id: self.room_id.unwrap_or(target.room_id),
            person_id: target.person_id,
            range: DateRange {
                start: self.start_date.unwrap_or(target.range.start),
                end: self.end_date.unwrap_or(target.range.end),
            },
            active: target.active,
        }
    }
}

/// Which bookings the filtered view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingFilter {
    #[default]
    All,
    /// Checked-in bookings only.
    Active,
    InRoom(RoomId),
    ForPerson(PersonId),
}

impl BookingFilter {
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            BookingFilter::All => true,
            BookingFilter::Active => booking.active,
            BookingFilter::InRoom(room_id) => booking.room_id == *room_id,
            BookingFilter::ForPerson(person_id) => booking.person_id == *person_id,
        }
    }
}
