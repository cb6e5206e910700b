use crate::model::BookingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    NotFound(BookingId),
    Duplicate,
    Conflict,
    InvalidDates(&'static str),
    AlreadyCheckedIn(BookingId),
    NotCheckedIn(BookingId),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotFound(_) => write!(f, "No valid booking can be found."),
            EngineError::Duplicate => write!(f, "This booking already exists."),
            EngineError::Conflict => {
                write!(f, "This booking conflicts with another booking.")
            }
            EngineError::InvalidDates(msg) => write!(f, "Invalid dates: {msg}."),
            EngineError::AlreadyCheckedIn(id) => {
                write!(f, "Booking {id} is already checked in.")
            }
            EngineError::NotCheckedIn(id) => write!(f, "Booking {id} is not checked in."),
        }
    }
}

impl std::error::Error for EngineError {}
