use actix_session::Session;

use crate::errors::AppError;
use crate::models::form::FormRecord;

const RECORD_KEY: &str = "form_record";
const FLASH_KEY: &str = "flash";

/// The record in the visitor's session, or a fresh empty one on first
/// visit (and after a corrupt cookie).
pub fn load_record(session: &Session) -> FormRecord {
    session
        .get::<FormRecord>(RECORD_KEY)
        .unwrap_or(None)
        .unwrap_or_default()
}

pub fn save_record(session: &Session, record: &FormRecord) -> Result<(), AppError> {
    session
        .insert(RECORD_KEY, record)
        .map_err(|e| AppError::Session(format!("Failed to store form record: {e}")))
}

pub fn set_flash(session: &Session, message: &str) -> Result<(), AppError> {
    session
        .insert(FLASH_KEY, message)
        .map_err(|e| AppError::Session(format!("Failed to store flash message: {e}")))
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
