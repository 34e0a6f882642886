use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::User;
use crate::domain::models::token::TokenPair;

/// 사용자 응답 DTO
///
/// 비밀번호 해시와 토큰 관련 필드는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            is_verified,
            created_at,
            ..
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            is_verified,
            created_at,
        }
    }
}

/// 회원 가입 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: i64,
}

/// 로그인 응답 DTO (토큰 쌍 + 사용자 정보)
///
/// 토큰 키는 camelCase, `user` 객체는 snake_case 그대로입니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: UserResponse,
}
