use askama::Template;
use chrono::NaiveDateTime;

use crate::models::form::{
    DATETIME_FORMAT, FormRecord, SelectOption, apart_options, floor_options, next_slot,
    tower_options,
};

/// The one page of the app. Everything is precomputed to plain strings and
/// booleans so the template stays dumb: visibility flags come straight from
/// the record's stage, current selections are the posted values (empty
/// string = unset), `min_date` feeds the datetime-local input.
#[derive(Template)]
#[template(path = "form.html")]
pub struct FormTemplate {
    pub flash: String,
    pub tower_options: Vec<SelectOption>,
    pub floor_options: Vec<SelectOption>,
    pub apart_options: Vec<SelectOption>,
    pub tower_value: String,
    pub floor_value: String,
    pub apart_value: String,
    pub date_value: String,
    pub extra_message: String,
    pub min_date: String,
    pub show_floor: bool,
    pub show_apartment: bool,
    pub show_schedule: bool,
    pub show_submit: bool,
}

impl FormTemplate {
    pub fn build(record: &FormRecord, flash: Option<String>, now: NaiveDateTime) -> Self {
        let stage = record.stage();
        Self {
            flash: flash.unwrap_or_default(),
            tower_options: tower_options(),
            floor_options: floor_options(),
            apart_options: apart_options(),
            tower_value: record.tower.map(|t| t.value().to_string()).unwrap_or_default(),
            floor_value: record.floor.map(|n| n.to_string()).unwrap_or_default(),
            apart_value: record.aparts.map(|n| n.to_string()).unwrap_or_default(),
            date_value: record
                .date
                .map(|dt| dt.format(DATETIME_FORMAT).to_string())
                .unwrap_or_default(),
            extra_message: record.extra_message.clone(),
            min_date: next_slot(now).format(DATETIME_FORMAT).to_string(),
            show_floor: stage.shows_floor(),
            show_apartment: stage.shows_apartment(),
            show_schedule: stage.shows_schedule(),
            show_submit: stage.shows_submit(),
        }
    }
}
