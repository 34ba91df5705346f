//! 극장 데이터 액세스 계층

pub mod theater_repo;

pub use theater_repo::TheaterRepository;
