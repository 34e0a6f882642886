//! # 사용자 리포지토리 구현
//!
//! 자격 증명 저장소(`users` 테이블)의 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **트랜잭션 가입**: 중복 확인과 INSERT를 하나의 트랜잭션에서 수행
//! - **조건부 갱신**: 인증 토큰 소비, 리프레시 토큰 교체, 비밀번호 재설정은
//!   모두 단일 `UPDATE ... WHERE` 문으로 처리되어 동시 요청 중 하나만 성공
//! - **토큰 해시 저장**: 리프레시/재설정 토큰은 SHA-256 다이제스트만 저장

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{NewUser, User};
use crate::repositories::{map_unique_violation, DUPLICATE_EMAIL};

const USER_COLUMNS: &str = "id, email, password_hash, first_name, last_name, is_verified, \
     verification_token, reset_token_hash, reset_token_expires_at, refresh_token_hash, \
     last_login_at, created_at, updated_at";

/// 사용자 데이터 액세스 트레이트
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 신규 사용자 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이미 등록된 이메일 (`Email already registered`)
    /// * `AppError::DatabaseError` - 쿼리 실패
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 재설정 토큰 해시로 사용자를 찾습니다. 만료 여부는 호출자가 판단합니다.
    async fn find_by_reset_token(&self, token_hash: &str) -> AppResult<Option<User>>;

    /// 아직 소비되지 않은 인증 토큰이면 사용자를 인증 상태로 바꾸고 토큰을 지웁니다.
    ///
    /// 갱신된 행이 없으면 `false`.
    async fn verify_email(&self, token: &str) -> AppResult<bool>;

    /// 로그인 성공 기록: 리프레시 토큰 해시를 교체하고 `last_login_at`을 갱신합니다.
    async fn record_login(&self, id: i64, refresh_token_hash: &str) -> AppResult<()>;

    /// 저장된 해시가 `current_hash`일 때만 `new_hash`로 교체합니다. (compare-and-swap)
    async fn rotate_refresh_token(
        &self,
        id: i64,
        current_hash: &str,
        new_hash: &str,
    ) -> AppResult<bool>;

    async fn clear_refresh_token(&self, id: i64) -> AppResult<()>;

    async fn set_reset_token(
        &self,
        id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// 만료되지 않은 재설정 토큰이 일치하면 비밀번호를 바꾸고,
    /// 재설정 토큰과 리프레시 토큰을 모두 지웁니다.
    ///
    /// 일치하는 행이 없으면 `false`.
    async fn reset_password(
        &self,
        token_hash: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool>;
}

/// PostgreSQL 기반 사용자 리포지토리
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(&new_user.email)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            return Err(AppError::ValidationError(DUPLICATE_EMAIL.to_string()));
        }

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, first_name, last_name, verification_token) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.verification_token)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_unique_violation(DUPLICATE_EMAIL))?;

        tx.commit().await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_reset_token(&self, token_hash: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE reset_token_hash = $1",
            USER_COLUMNS
        ))
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn verify_email(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET is_verified = TRUE, verification_token = NULL, updated_at = NOW() \
             WHERE verification_token = $1 AND is_verified = FALSE",
        )
        .bind(token)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn record_login(&self, id: i64, refresh_token_hash: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET refresh_token_hash = $2, last_login_at = NOW(), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(refresh_token_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        id: i64,
        current_hash: &str,
        new_hash: &str,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET refresh_token_hash = $3, updated_at = NOW() \
             WHERE id = $1 AND refresh_token_hash = $2",
        )
        .bind(id)
        .bind(current_hash)
        .bind(new_hash)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn clear_refresh_token(&self, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE users SET refresh_token_hash = NULL, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET reset_token_hash = $2, reset_token_expires_at = $3, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn reset_password(
        &self,
        token_hash: &str,
        password_hash: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, reset_token_hash = NULL, \
             reset_token_expires_at = NULL, refresh_token_hash = NULL, updated_at = NOW() \
             WHERE reset_token_hash = $1 AND reset_token_expires_at > $3",
        )
        .bind(token_hash)
        .bind(password_hash)
        .bind(now)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
