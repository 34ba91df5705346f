//! 극장 비즈니스 로직

pub mod theater_service;

pub use theater_service::TheaterService;
