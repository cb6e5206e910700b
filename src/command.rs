use chrono::NaiveDate;

use crate::model::{BookingFilter, BookingId, BookingPatch, DateRange};

/// Parsed command from one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddBooking {
        room_id: u32,
        person_id: u32,
        range: DateRange,
    },
    EditBooking {
        id: BookingId,
        patch: BookingPatch,
    },
    DeleteBooking {
        id: BookingId,
    },
    ListBookings,
    FindBookings {
        filter: BookingFilter,
    },
    CheckIn {
        id: BookingId,
    },
    CheckOut {
        id: BookingId,
    },
    Clear,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidId(String),
    InvalidDate(String),
    UnknownArgument(String),
    DuplicatePrefix(&'static str),
    NothingToEdit,
    BadFilter,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "no command given"),
            ParseError::UnknownCommand(word) => write!(f, "unknown command: {word}"),
            ParseError::MissingArgument(arg) => write!(f, "missing argument: {arg}"),
            ParseError::InvalidId(s) => write!(f, "invalid id: {s}"),
            ParseError::InvalidDate(s) => {
                write!(f, "invalid date (expected YYYY-MM-DD): {s}")
            }
            ParseError::UnknownArgument(s) => write!(f, "unexpected argument: {s}"),
            ParseError::DuplicatePrefix(prefix) => write!(f, "repeated prefix: {prefix}"),
            ParseError::NothingToEdit => {
                write!(f, "At least one field to edit must be provided.")
            }
            ParseError::BadFilter => {
                write!(f, "findBooking takes exactly one of r/ROOM or p/PERSON")
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next().ok_or(ParseError::Empty)?;
    let args: Vec<&str> = tokens.collect();

    match word {
        "addBooking" => parse_add(&args),
        "editBooking" => parse_edit(&args),
        "deleteBooking" => Ok(Command::DeleteBooking {
            id: parse_sole_id(&args)?,
        }),
        "findBooking" => parse_find(&args),
        "listBooking" => {
            ensure_no_args(&args)?;
            Ok(Command::ListBookings)
        }
        "checkIn" => Ok(Command::CheckIn {
            id: parse_sole_id(&args)?,
        }),
        "checkOut" => Ok(Command::CheckOut {
            id: parse_sole_id(&args)?,
        }),
        "clear" => {
            ensure_no_args(&args)?;
            Ok(Command::Clear)
        }
        "help" => {
            ensure_no_args(&args)?;
            Ok(Command::Help)
        }
        "exit" => {
            ensure_no_args(&args)?;
            Ok(Command::Exit)
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// `r/101`-style arguments, at most one per prefix.
struct Prefixed<'a> {
    room: Option<&'a str>,
    person: Option<&'a str>,
    start: Option<&'a str>,
    end: Option<&'a str>,
}

fn collect_prefixed<'a>(args: &[&'a str]) -> Result<Prefixed<'a>, ParseError> {
    let mut p = Prefixed {
        room: None,
        person: None,
        start: None,
        end: None,
    };
    for arg in args {
        let (slot, name, value) = if let Some(v) = arg.strip_prefix("r/") {
            (&mut p.room, "r/", v)
        } else if let Some(v) = arg.strip_prefix("p/") {
            (&mut p.person, "p/", v)
        } else if let Some(v) = arg.strip_prefix("s/") {
            (&mut p.start, "s/", v)
        } else if let Some(v) = arg.strip_prefix("e/") {
            (&mut p.end, "e/", v)
        } else {
            return Err(ParseError::UnknownArgument(arg.to_string()));
        };
        if slot.is_some() {
            return Err(ParseError::DuplicatePrefix(name));
        }
        *slot = Some(value);
    }
    Ok(p)
}

fn parse_add(args: &[&str]) -> Result<Command, ParseError> {
    let p = collect_prefixed(args)?;
    let room_id = parse_id(p.room.ok_or(ParseError::MissingArgument("r/ROOM"))?)?;
    let person_id = parse_id(p.person.ok_or(ParseError::MissingArgument("p/PERSON"))?)?;
    let start = parse_date(p.start.ok_or(ParseError::MissingArgument("s/START"))?)?;
    let end = parse_date(p.end.ok_or(ParseError::MissingArgument("e/END"))?)?;
    Ok(Command::AddBooking {
        room_id,
        person_id,
        range: DateRange::new(start, end),
    })
}

fn parse_edit(args: &[&str]) -> Result<Command, ParseError> {
    let (first, rest) = args
        .split_first()
        .ok_or(ParseError::MissingArgument("BOOKING_ID"))?;
    let id = parse_id(first)?;
    let p = collect_prefixed(rest)?;
    if p.person.is_some() {
        // The person on a booking is fixed at creation.
        return Err(ParseError::UnknownArgument("p/".to_string()));
    }
    let patch = BookingPatch {
        room_id: p.room.map(parse_id).transpose()?,
        start_date: p.start.map(parse_date).transpose()?,
        end_date: p.end.map(parse_date).transpose()?,
    };
    if !patch.edits_anything() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::EditBooking { id, patch })
}

fn parse_find(args: &[&str]) -> Result<Command, ParseError> {
    let p = collect_prefixed(args)?;
    if p.start.is_some() || p.end.is_some() {
        return Err(ParseError::BadFilter);
    }
    let filter = match (p.room, p.person) {
        (Some(room), None) => BookingFilter::InRoom(parse_id(room)?),
        (None, Some(person)) => BookingFilter::ForPerson(parse_id(person)?),
        _ => return Err(ParseError::BadFilter),
    };
    Ok(Command::FindBookings { filter })
}

fn parse_sole_id(args: &[&str]) -> Result<BookingId, ParseError> {
    match args {
        [] => Err(ParseError::MissingArgument("BOOKING_ID")),
        [id] => parse_id(id),
        [_, extra, ..] => Err(ParseError::UnknownArgument(extra.to_string())),
    }
}

fn ensure_no_args(args: &[&str]) -> Result<(), ParseError> {
    match args.first() {
        None => Ok(()),
        Some(extra) => Err(ParseError::UnknownArgument(extra.to_string())),
    }
}

fn parse_id(s: &str) -> Result<u32, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidId(s.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parse_edit_with_all_fields() {
        let cmd = parse_command("editBooking 1 r/2103 s/2020-12-25 e/2020-12-28").unwrap();
        assert_eq!(
            cmd,
            Command::EditBooking {
                id: 1,
                patch: BookingPatch {
                    room_id: Some(2103),
                    start_date: Some(d("2020-12-25")),
                    end_date: Some(d("2020-12-28")),
                },
            }
        );
    }

    #[test]
    fn parse_edit_with_subset_of_fields() {
        let cmd = parse_command("editBooking 12 s/2021-01-02").unwrap();
        assert_eq!(
            cmd,
            Command::EditBooking {
                id: 12,
                patch: BookingPatch {
                    room_id: None,
                    start_date: Some(d("2021-01-02")),
                    end_date: None,
                },
            }
        );
    }

    #[test]
    fn parse_edit_without_fields_is_rejected() {
        assert_eq!(
            parse_command("editBooking 1"),
            Err(ParseError::NothingToEdit)
        );
    }

    #[test]
    fn parse_edit_rejects_person_prefix() {
        assert_eq!(
            parse_command("editBooking 1 p/9"),
            Err(ParseError::UnknownArgument("p/".to_string()))
        );
    }

    #[test]
    fn parse_edit_without_id_is_rejected() {
        assert_eq!(
            parse_command("editBooking"),
            Err(ParseError::MissingArgument("BOOKING_ID"))
        );
        assert_eq!(
            parse_command("editBooking r/101"),
            Err(ParseError::InvalidId("r/101".to_string()))
        );
    }

    #[test]
    fn parse_add() {
        let cmd = parse_command("addBooking r/101 p/5 s/2020-01-01 e/2020-01-05").unwrap();
        assert_eq!(
            cmd,
            Command::AddBooking {
                room_id: 101,
                person_id: 5,
                range: DateRange::new(d("2020-01-01"), d("2020-01-05")),
            }
        );
    }

    #[test]
    fn parse_add_missing_prefix() {
        assert_eq!(
            parse_command("addBooking r/101 p/5 s/2020-01-01"),
            Err(ParseError::MissingArgument("e/END"))
        );
    }

    #[test]
    fn parse_repeated_prefix_rejected() {
        assert_eq!(
            parse_command("addBooking r/101 r/202 p/5 s/2020-01-01 e/2020-01-05"),
            Err(ParseError::DuplicatePrefix("r/"))
        );
    }

    #[test]
    fn parse_bad_date() {
        assert_eq!(
            parse_command("addBooking r/101 p/5 s/01-01-2020 e/2020-01-05"),
            Err(ParseError::InvalidDate("01-01-2020".to_string()))
        );
    }

    #[test]
    fn parse_find_variants() {
        assert_eq!(
            parse_command("findBooking r/101"),
            Ok(Command::FindBookings {
                filter: BookingFilter::InRoom(101)
            })
        );
        assert_eq!(
            parse_command("findBooking p/5"),
            Ok(Command::FindBookings {
                filter: BookingFilter::ForPerson(5)
            })
        );
        assert_eq!(parse_command("findBooking"), Err(ParseError::BadFilter));
        assert_eq!(
            parse_command("findBooking r/101 p/5"),
            Err(ParseError::BadFilter)
        );
    }

    #[test]
    fn parse_bare_id_commands() {
        assert_eq!(
            parse_command("deleteBooking 3"),
            Ok(Command::DeleteBooking { id: 3 })
        );
        assert_eq!(parse_command("checkIn 4"), Ok(Command::CheckIn { id: 4 }));
        assert_eq!(parse_command("checkOut 4"), Ok(Command::CheckOut { id: 4 }));
        assert_eq!(
            parse_command("deleteBooking three"),
            Err(ParseError::InvalidId("three".to_string()))
        );
        assert_eq!(
            parse_command("deleteBooking 3 4"),
            Err(ParseError::UnknownArgument("4".to_string()))
        );
    }

    #[test]
    fn parse_no_arg_commands() {
        assert_eq!(parse_command("listBooking"), Ok(Command::ListBookings));
        assert_eq!(parse_command("clear"), Ok(Command::Clear));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
        assert_eq!(
            parse_command("listBooking now"),
            Err(ParseError::UnknownArgument("now".to_string()))
        );
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert_eq!(
            parse_command("bookRoom 1"),
            Err(ParseError::UnknownCommand("bookRoom".to_string()))
        );
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
    }
}
