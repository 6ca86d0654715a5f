pub mod form_handlers;
