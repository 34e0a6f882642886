//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 비밀번호 해시와 각종 토큰을 포함하므로 직렬화를 지원하지 않으며,
//! 클라이언트 응답에는 항상 `UserResponse` DTO를 사용합니다.

use chrono::{DateTime, Utc};

/// 사용자 엔티티
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// 이메일 인증 여부
    pub is_verified: bool,
    /// 이메일 인증 토큰 (인증 완료 시 제거)
    pub verification_token: Option<String>,
    /// 비밀번호 재설정 토큰의 SHA-256 해시
    pub reset_token_hash: Option<String>,
    /// 비밀번호 재설정 토큰 만료 시각
    pub reset_token_expires_at: Option<DateTime<Utc>>,
    /// 현재 유효한 리프레시 토큰의 SHA-256 해시 (세션당 하나)
    pub refresh_token_hash: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 표시용 전체 이름
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 주어진 리프레시 토큰 해시가 현재 저장된 값과 일치하는지 확인
    pub fn holds_refresh_token(&self, token_hash: &str) -> bool {
        self.refresh_token_hash.as_deref() == Some(token_hash)
    }

    /// 재설정 토큰이 `now` 시점에 아직 유효한지 확인
    pub fn reset_token_valid_at(&self, token_hash: &str, now: DateTime<Utc>) -> bool {
        match (&self.reset_token_hash, self.reset_token_expires_at) {
            (Some(stored), Some(expires_at)) => stored == token_hash && expires_at > now,
            _ => false,
        }
    }
}

/// 가입 시 저장할 신규 사용자 데이터
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub verification_token: String,
}
