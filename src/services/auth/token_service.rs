//! # JWT 토큰 서비스
//!
//! 액세스/리프레시 토큰의 발급과 검증을 담당합니다.
//!
//! | 토큰 | 서명 키 | 기본 수명 | 클레임 |
//! |------|---------|-----------|--------|
//! | access | `JWT_SECRET` | 60분 | `sub`, `email`, `token_type`, `iat`, `exp` |
//! | refresh | `JWT_REFRESH_SECRET` | 7일 | `sub`, `token_type`, `jti`, `iat`, `exp` |
//!
//! 두 토큰은 서로 다른 키로 서명되므로 한쪽을 다른 쪽 용도로 쓸 수 없습니다.
//! 검증 실패는 "만료"(`AppError::TokenExpired`)와 "무효"(`AppError::AuthenticationError`)로 구분됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::token::{TokenClaims, TokenPair, TokenType};

pub struct TokenService {
    config: JwtConfig,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            config,
        }
    }

    /// 액세스 토큰 수명 (초)
    pub fn access_expires_in(&self) -> i64 {
        self.config.access_expires_in()
    }

    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id.to_string(),
            email: Some(user.email.clone()),
            token_type: TokenType::Access,
            jti: None,
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.config.access_expiration_minutes)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user.id.to_string(),
            email: None,
            token_type: TokenType::Refresh,
            jti: Some(Uuid::new_v4().to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.config.refresh_expiration_days)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        Ok(TokenPair::bearer(
            self.generate_access_token(user)?,
            self.generate_refresh_token(user)?,
            self.access_expires_in(),
        ))
    }

    /// 액세스 토큰 검증
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::AuthenticationError` - 서명 불일치, 형식 오류, 용도 불일치
    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify(token, &self.access_decoding, TokenType::Access, "Invalid token")
    }

    /// 리프레시 토큰 검증
    pub fn verify_refresh_token(&self, token: &str) -> AppResult<TokenClaims> {
        self.verify(token, &self.refresh_decoding, TokenType::Refresh, "Invalid refresh token")
    }

    fn verify(
        &self,
        token: &str,
        key: &DecodingKey,
        expected: TokenType,
        invalid_message: &str,
    ) -> AppResult<TokenClaims> {
        // 만료 시각을 1초도 넘기면 거부 (jsonwebtoken 기본 leeway 60초 제거)
        let mut validation = Validation::default();
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired("Token expired".to_string()),
                _ => AppError::AuthenticationError(invalid_message.to_string()),
            })?;

        if claims.token_type != expected || claims.user_id().is_none() {
            return Err(AppError::AuthenticationError(invalid_message.to_string()));
        }

        Ok(claims)
    }

    /// `Authorization` 헤더에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("Authentication required".to_string())),
        }
    }
}
