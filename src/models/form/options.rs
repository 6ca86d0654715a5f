use super::types::Tower;

pub const FLOOR_MIN: u8 = 3;
pub const FLOOR_MAX: u8 = 27;
pub const APART_MIN: u8 = 1;
pub const APART_MAX: u8 = 10;

/// A value/label pair for a select control. The template renders the label;
/// the select posts the value back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn tower_options() -> Vec<SelectOption> {
    [Tower::A, Tower::B]
        .into_iter()
        .map(|t| SelectOption {
            value: t.value().to_string(),
            label: t.label().to_string(),
        })
        .collect()
}

/// Floors 3 through 27, label equals value.
pub fn floor_options() -> Vec<SelectOption> {
    (FLOOR_MIN..=FLOOR_MAX)
        .map(|n| SelectOption {
            value: n.to_string(),
            label: n.to_string(),
        })
        .collect()
}

/// Apartments 1 through 10, label equals value.
pub fn apart_options() -> Vec<SelectOption> {
    (APART_MIN..=APART_MAX)
        .map(|n| SelectOption {
            value: n.to_string(),
            label: n.to_string(),
        })
        .collect()
}
