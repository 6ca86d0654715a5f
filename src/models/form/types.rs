use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The two towers that host meetups. The serialized form keeps the stable
/// identifiers ("tower-a"/"tower-b") used by the selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tower {
    #[serde(rename = "tower-a")]
    A,
    #[serde(rename = "tower-b")]
    B,
}

impl Tower {
    pub fn value(self) -> &'static str {
        match self {
            Tower::A => "tower-a",
            Tower::B => "tower-b",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tower::A => "Tower A",
            Tower::B => "Tower B",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "tower-a" => Some(Tower::A),
            "tower-b" => Some(Tower::B),
            _ => None,
        }
    }
}

/// How far down the tower → floor → apartment → schedule chain the user has
/// filled the form: the length of the non-empty prefix of the field
/// sequence. Control visibility is derived from this alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Tower,
    Floor,
    Apartment,
    Schedule,
    Ready,
}

impl Stage {
    pub fn shows_floor(self) -> bool {
        self >= Stage::Floor
    }

    pub fn shows_apartment(self) -> bool {
        self >= Stage::Apartment
    }

    /// Date/time picker and the optional note share a gate.
    pub fn shows_schedule(self) -> bool {
        self >= Stage::Schedule
    }

    /// The note never gates submission.
    pub fn shows_submit(self) -> bool {
        self == Stage::Ready
    }
}

/// The meetup request being assembled. Every field is independently empty;
/// the gate chain lives in the rendering layer, not here. Wire names match
/// the serialized payload: tower, floor, aparts, date, extraMessage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub tower: Option<Tower>,
    pub floor: Option<u8>,
    pub aparts: Option<u8>,
    #[serde(with = "wire_datetime")]
    pub date: Option<NaiveDateTime>,
    #[serde(rename = "extraMessage")]
    pub extra_message: String,
}

impl FormRecord {
    /// Writes exactly the field named by the update. Changing an upstream
    /// field does not clear downstream selections.
    pub fn apply(&mut self, update: super::FieldUpdate) {
        use super::FieldUpdate::*;
        match update {
            SetTower(tower) => self.tower = Some(tower),
            SetFloor(floor) => self.floor = Some(floor),
            SetApartment(aparts) => self.aparts = Some(aparts),
            SetMeetingTime(date) => self.date = Some(date),
            SetNote(text) => self.extra_message = text,
        }
    }

    pub fn stage(&self) -> Stage {
        if self.tower.is_none() {
            Stage::Tower
        } else if self.floor.is_none() {
            Stage::Floor
        } else if self.aparts.is_none() {
            Stage::Apartment
        } else if self.date.is_none() {
            Stage::Schedule
        } else {
            Stage::Ready
        }
    }

    /// Serializes the whole record, set or not, in declaration order.
    /// Submission never mutates or clears the record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Wire format for the meetup moment: the datetime-local input format,
/// minutes precision, no timezone.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

mod wire_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATETIME_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
