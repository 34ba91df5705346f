//! # 응답 DTO 모듈
//!
//! 모든 핸들러가 공유하는 응답 봉투([`ApiResponse`])와
//! 쓰기 연산 결과 구조체를 정의합니다.

pub mod envelope;
pub mod results;

pub use envelope::ApiResponse;
pub use results::{DeletedResponse, InsertedResponse, ModifiedResponse};
