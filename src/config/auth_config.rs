//! 인증 관련 설정
//!
//! JWT 서명 키와 토큰 수명, 비밀번호 재설정 토큰 수명을 관리합니다.

use std::env;

use crate::config::data_config::env_or;

/// JWT 토큰 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀 키로 서명됩니다.
/// 따라서 리프레시 토큰을 액세스 토큰으로 (혹은 그 반대로) 사용할 수 없습니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명 키 (`JWT_SECRET`)
    pub access_secret: String,
    /// 리프레시 토큰 서명 키 (`JWT_REFRESH_SECRET`)
    pub refresh_secret: String,
    /// 액세스 토큰 수명 (분)
    pub access_expiration_minutes: i64,
    /// 리프레시 토큰 수명 (일)
    pub refresh_expiration_days: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            access_secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            }),
            refresh_secret: env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| {
                log::warn!("JWT_REFRESH_SECRET not set, using default (not secure for production!)");
                "your-refresh-secret-key".to_string()
            }),
            access_expiration_minutes: env_or("JWT_ACCESS_EXPIRATION_MINUTES", 60),
            refresh_expiration_days: env_or("JWT_REFRESH_EXPIRATION_DAYS", 7),
        }
    }

    /// 액세스 토큰 수명 (초)
    pub fn access_expires_in(&self) -> i64 {
        self.access_expiration_minutes * 60
    }
}

/// 비밀번호 재설정 정책
#[derive(Debug, Clone)]
pub struct PasswordResetConfig {
    /// 재설정 토큰 유효 시간 (분, 기본 60분)
    pub expiration_minutes: i64,
}

impl PasswordResetConfig {
    pub fn from_env() -> Self {
        Self {
            expiration_minutes: env_or("PASSWORD_RESET_EXPIRATION_MINUTES", 60),
        }
    }
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self { expiration_minutes: 60 }
    }
}
