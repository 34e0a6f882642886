//! Users Entity Module
//!
//! 자격 증명 저장소(`users` 테이블)의 한 행을 표현하는 [`User`] 엔티티를 정의합니다.
//!
//! # 사용자 상태
//!
//! ```text
//! 가입 ──▶ unverified ──(verification token)──▶ verified
//!
//! refresh token:  none ──login──▶ issued ──refresh──▶ rotated
//!                   ▲                │
//!                   └────logout──────┘
//! ```

pub mod user;

pub use user::{NewUser, User};
