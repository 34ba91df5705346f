//! 댓글 비즈니스 로직

pub mod comment_service;

pub use comment_service::CommentService;
