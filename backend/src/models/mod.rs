pub mod calendar;
pub mod common;
pub mod employee;
pub mod grid;
pub mod request;
pub mod status;
