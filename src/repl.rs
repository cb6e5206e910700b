use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::command::{self, Command};
use crate::engine::{Engine, EngineError};

/// Result of one executed command: a user-facing message plus UI hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    /// The booking panel should be brought to the front.
    pub show_bookings: bool,
    /// The session should end.
    pub exit: bool,
}

impl Outcome {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            show_bookings: false,
            exit: false,
        }
    }

    fn listing(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            show_bookings: true,
            exit: false,
        }
    }
}

pub const HELP: &str = "\
addBooking r/ROOM p/PERSON s/START e/END   register a reservation
editBooking ID [r/ROOM] [s/START] [e/END]  change room or dates
deleteBooking ID                           remove a booking
listBooking                                show checked-in bookings
findBooking r/ROOM | p/PERSON              filter by room or person
checkIn ID / checkOut ID                   start or end the stay
clear                                      drop all bookings
exit                                       quit";

/// Execute one parsed command against the engine.
pub fn dispatch(engine: &mut Engine, cmd: Command) -> Result<Outcome, EngineError> {
    debug!(?cmd, "dispatch");
    match cmd {
        Command::AddBooking {
            room_id,
            person_id,
            range,
        } => {
            let booking = engine.add_booking(room_id, person_id, range)?;
            Ok(Outcome::plain(format!("New booking added: {booking}")))
        }
        Command::EditBooking { id, patch } => {
            let booking = engine.edit_booking(id, patch)?;
            Ok(Outcome::plain(format!("Edited Booking: {booking}")))
        }
        Command::DeleteBooking { id } => {
            let booking = engine.delete_booking(id)?;
            Ok(Outcome::plain(format!("Deleted Booking: {booking}")))
        }
        Command::ListBookings => {
            let n = engine.list_bookings();
            Ok(Outcome::listing(format!("{n} bookings listed")))
        }
        Command::FindBookings { filter } => {
            let n = engine.find_bookings(filter);
            Ok(Outcome::listing(format!("{n} bookings found")))
        }
        Command::CheckIn { id } => {
            let booking = engine.check_in(id)?;
            Ok(Outcome::plain(format!("Checked in: {booking}")))
        }
        Command::CheckOut { id } => {
            let booking = engine.check_out(id)?;
            Ok(Outcome::plain(format!("Checked out: {booking}")))
        }
        Command::Clear => {
            let n = engine.clear();
            Ok(Outcome::plain(format!("Cleared {n} bookings")))
        }
        Command::Help => Ok(Outcome::plain(HELP)),
        Command::Exit => Ok(Outcome {
            message: "Bye.".into(),
            show_bookings: false,
            exit: true,
        }),
    }
}

/// Line-oriented session: read commands, print outcomes, stop on `exit`
/// or end of input. Parse and engine failures are printed and the session
/// keeps going.
pub fn run<R: BufRead, W: Write>(engine: &mut Engine, input: R, mut out: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match command::parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        match dispatch(engine, cmd) {
            Ok(outcome) => {
                writeln!(out, "{}", outcome.message)?;
                if outcome.show_bookings {
                    for booking in engine.filtered_snapshot() {
                        writeln!(out, "  {booking}")?;
                    }
                }
                if outcome.exit {
                    break;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    out.flush()
}
