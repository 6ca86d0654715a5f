use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::clock::Clock;
use crate::errors::{AppError, render};
use crate::models::form::{FieldUpdate, FormError, FormRecord};
use crate::session;
use crate::sink::SubmissionSink;
use crate::templates_structs::FormTemplate;

/// Posted by every control: which field, and its raw value.
#[derive(Deserialize)]
pub struct FieldForm {
    pub field: String,
    pub value: String,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

/// GET / — render the form at whatever stage the session record is at.
pub async fn form_page(
    session: Session,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, AppError> {
    let record = session::load_record(&session);
    let flash = session::take_flash(&session);
    let tmpl = FormTemplate::build(&record, flash, clock.now());
    render(tmpl)
}

/// POST /field — apply one field update to the session record.
///
/// Bad user input (a past meetup time, an off-grid slot) flashes and
/// redirects; an unknown field name is a caller bug and fails fast with 400.
pub async fn set_field(
    session: Session,
    clock: web::Data<dyn Clock>,
    form: web::Form<FieldForm>,
) -> Result<HttpResponse, AppError> {
    let mut record = session::load_record(&session);
    match FieldUpdate::parse(&form.field, &form.value, clock.now()) {
        Ok(update) => {
            record.apply(update);
            session::save_record(&session, &record)?;
        }
        Err(err @ FormError::UnknownField(_)) => return Err(AppError::Form(err)),
        Err(err) => session::set_flash(&session, &err.to_string())?,
    }
    Ok(see_other("/"))
}

/// POST /submit — serialize the whole record and hand it to the sink.
///
/// No completeness check here: the submit button only renders once the gate
/// chain is satisfied. The record is not cleared.
pub async fn submit(
    session: Session,
    sink: web::Data<dyn SubmissionSink>,
) -> Result<HttpResponse, AppError> {
    let record = session::load_record(&session);
    let payload = record.to_json()?;
    sink.emit(&payload);
    session::set_flash(&session, "Meetup request submitted")?;
    Ok(see_other("/"))
}

/// POST /reset — replace the record with a fresh empty one.
pub async fn reset(session: Session) -> Result<HttpResponse, AppError> {
    session::save_record(&session, &FormRecord::default())?;
    Ok(see_other("/"))
}
