//! 인증 관련 서비스
//!
//! - [`token_service`] - JWT 발급/검증
//! - [`auth_service`] - 가입, 로그인, 이메일 인증, 토큰 갱신, 비밀번호 재설정

pub mod token_service;
pub mod auth_service;

pub use token_service::TokenService;
pub use auth_service::AuthService;
