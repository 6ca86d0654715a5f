use std::fmt;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

use super::options::{APART_MAX, APART_MIN, FLOOR_MAX, FLOOR_MIN};
use super::types::{DATETIME_FORMAT, Tower};

/// Minutes between selectable meetup slots.
pub const SLOT_MINUTES: u32 = 30;

/// The first selectable slot at or after `now`. The picker's `min`
/// attribute anchors the browser's step grid, so it must itself sit on a
/// slot boundary or every steppable value would fail validation.
pub fn next_slot(now: NaiveDateTime) -> NaiveDateTime {
    let slot = Duration::minutes(SLOT_MINUTES as i64);
    let day_start = now.date().and_time(NaiveTime::MIN);
    let elapsed = (now - day_start).num_seconds();
    let slots = elapsed.div_ceil(slot.num_seconds());
    day_start + slot * slots as i32
}

/// The five update operations, one per form field. Constructed only through
/// [`FieldUpdate::parse`], so a value that made it into a `FieldUpdate` is
/// already inside its fixed domain.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    SetTower(Tower),
    SetFloor(u8),
    SetApartment(u8),
    SetMeetingTime(NaiveDateTime),
    SetNote(String),
}

/// Everything that can go wrong at the form boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Field name outside the known five. A caller bug, not user input.
    UnknownField(String),
    UnknownTower(String),
    FloorOutOfRange(String),
    ApartmentOutOfRange(String),
    BadDate(String),
    DateInPast(NaiveDateTime),
    DateNotOnSlot(NaiveDateTime),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(name) => write!(f, "Unknown form field: {name}"),
            FormError::UnknownTower(value) => write!(f, "Unknown tower: {value}"),
            FormError::FloorOutOfRange(value) => {
                write!(f, "Floor must be between {FLOOR_MIN} and {FLOOR_MAX}, got: {value}")
            }
            FormError::ApartmentOutOfRange(value) => {
                write!(f, "Apartment must be between {APART_MIN} and {APART_MAX}, got: {value}")
            }
            FormError::BadDate(raw) => write!(f, "Could not read meetup time: {raw}"),
            FormError::DateInPast(dt) => {
                write!(f, "Meetup time {} is in the past", dt.format(DATETIME_FORMAT))
            }
            FormError::DateNotOnSlot(dt) => write!(
                f,
                "Meetup time {} is not on a {SLOT_MINUTES}-minute slot",
                dt.format(DATETIME_FORMAT)
            ),
        }
    }
}

impl FieldUpdate {
    /// Turns a raw (field name, value) pair from the boundary into a typed
    /// update, validating against the field's fixed domain. `now` is the
    /// clock reading used for the meetup-time lower bound.
    pub fn parse(field: &str, raw: &str, now: NaiveDateTime) -> Result<Self, FormError> {
        match field {
            "tower" => Tower::from_value(raw)
                .map(FieldUpdate::SetTower)
                .ok_or_else(|| FormError::UnknownTower(raw.to_string())),
            "floor" => match raw.parse::<u8>() {
                Ok(n) if (FLOOR_MIN..=FLOOR_MAX).contains(&n) => Ok(FieldUpdate::SetFloor(n)),
                _ => Err(FormError::FloorOutOfRange(raw.to_string())),
            },
            "aparts" => match raw.parse::<u8>() {
                Ok(n) if (APART_MIN..=APART_MAX).contains(&n) => Ok(FieldUpdate::SetApartment(n)),
                _ => Err(FormError::ApartmentOutOfRange(raw.to_string())),
            },
            "date" => {
                let dt = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                    .map_err(|_| FormError::BadDate(raw.to_string()))?;
                if dt < now {
                    return Err(FormError::DateInPast(dt));
                }
                if dt.minute() % SLOT_MINUTES != 0 || dt.second() != 0 {
                    return Err(FormError::DateNotOnSlot(dt));
                }
                Ok(FieldUpdate::SetMeetingTime(dt))
            }
            "extraMessage" => Ok(FieldUpdate::SetNote(raw.to_string())),
            _ => Err(FormError::UnknownField(field.to_string())),
        }
    }
}
