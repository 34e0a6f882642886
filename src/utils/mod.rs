//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 필드 검사, 문자열 정리, 관대한 serde 역직렬화 헬퍼
//! - [`token_utils`] - 랜덤 토큰 생성과 SHA-256 해싱
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::require_fields;
//! use crate::utils::token_utils::{generate_random_token, hash_token};
//!
//! require_fields(&[("email", email.is_some())])?;
//!
//! let token = generate_random_token();
//! let stored = hash_token(&token);
//! ```

pub mod string_utils;
pub mod token_utils;
