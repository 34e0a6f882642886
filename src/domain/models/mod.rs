//! # Domain Models
//!
//! 엔티티도 API 계약도 아니지만 여러 계층이 공유하는 모델들입니다.
//!
//! - [`auth`] - 인증 미들웨어가 요청 확장 영역에 넣는 인증 주체
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`pagination`] - 페이지 요청/응답 메타데이터와 정렬 방향

pub mod auth;
pub mod token;
pub mod pagination;
