//! Theaters Entity Module

pub mod theater;

pub use theater::{NewTheater, theater_fields};
