#![feature(int_roundings)]

pub mod clock;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod session;
pub mod sink;
pub mod templates_structs;
